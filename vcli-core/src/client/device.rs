use super::session::ApplianceClient;
use crate::error::VcliResult;
use crate::types::device::DeviceInfoResponse;
use crate::types::DeviceInfo;

pub(crate) const DEVICE_INFO: &str = "DeviceInfo";

impl ApplianceClient {
    pub async fn device_info(&self) -> VcliResult<DeviceInfo> {
        let response: DeviceInfoResponse = self.get_json("get device info", DEVICE_INFO).await?;
        Ok(response.device.device_info)
    }
}
