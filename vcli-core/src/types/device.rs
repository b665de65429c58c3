use serde::{Deserialize, Serialize};

/// Identity and firmware snapshot of the appliance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceInfo {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,
    #[serde(rename = "DeviceId")]
    pub device_id: String,
    /// Hostname of the appliance
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ApplicationVersion")]
    pub application_version: String,
    #[serde(rename = "BuildDate")]
    pub build_date: String,
    #[serde(rename = "DeviceKey")]
    pub device_key: String,
    #[serde(rename = "MacAddress")]
    pub mac_address: String,
    /// Firmware version
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "PythonVersion")]
    pub python_version: String,
    #[serde(rename = "MonoVersion")]
    pub mono_version: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeviceInfoResponse {
    #[serde(rename = "Device")]
    pub device: DeviceInfoContext,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeviceInfoContext {
    #[serde(rename = "DeviceInfo")]
    pub device_info: DeviceInfo,
}
