use ratatui::widgets::TableState;
use vcli_core::types::DeviceInfo;
use vcli_core::{VcliError, VcliResult};

/// Device snapshot shown on the home and device screens.
#[derive(Debug, Default)]
pub struct DeviceScreen {
    pub info: Option<DeviceInfo>,
    pub error: Option<VcliError>,
    pub table_state: TableState,
}

/// Label/value rows in display order.
pub fn device_info_rows(info: &DeviceInfo) -> Vec<(&'static str, String)> {
    vec![
        ("Hostname", info.name.clone()),
        ("MAC Address", info.mac_address.clone()),
        ("Build Date", info.build_date.clone()),
        ("App Version", info.application_version.clone()),
        ("Firmware", info.version.clone()),
        ("Mono Version", info.mono_version.clone()),
        ("Python Version", info.python_version.clone()),
        ("Manufacturer", info.manufacturer.clone()),
        ("Model", info.model.clone()),
    ]
}

impl DeviceScreen {
    pub fn apply(&mut self, result: VcliResult<DeviceInfo>) {
        match result {
            Ok(info) => {
                self.info = Some(info);
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }

    pub fn row_count(&self) -> usize {
        self.info.as_ref().map_or(0, |info| device_info_rows(info).len())
    }
}
