use serde::{Deserialize, Serialize};

/// One device mapped into a room's IP table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct IpTableEntry {
    pub unique_id: i64,
    #[serde(rename = "ProgramInstanceId")]
    pub program_instance_id: String,
    #[serde(rename = "ProgramIpId")]
    pub program_ip_id: i64,
    pub model: String,
    pub description: String,
    #[serde(rename = "remote_ip")]
    pub remote_ip: String,
    /// ONLINE or OFFLINE
    pub status: String,
    #[serde(rename = "device_type")]
    pub device_type: i64,
    pub mac_address: String,
    pub device_id: i64,
    pub hostname: String,
    pub support_association: bool,
}

impl IpTableEntry {
    pub fn is_online(&self) -> bool {
        self.status.eq_ignore_ascii_case("ONLINE")
    }

    /// IP ids are conventionally shown in hex, e.g. `0x03`.
    pub fn ip_id_hex(&self) -> String {
        format!("{:#04X}", self.program_ip_id)
    }
}

pub fn sort_ip_table(entries: &mut [IpTableEntry]) {
    entries.sort_by_key(|e| e.program_ip_id);
}

#[derive(Debug, Deserialize)]
pub(crate) struct IpTableResponse {
    #[serde(rename = "Device")]
    pub device: IpTableDevice,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IpTableDevice {
    #[serde(rename = "Programs")]
    pub programs: IpTablePrograms,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IpTablePrograms {
    #[serde(rename = "IpTableByPID", default)]
    pub ip_table_by_pid: Vec<IpTableEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_formatting() {
        let entry = IpTableEntry {
            program_ip_id: 3,
            ..IpTableEntry::default()
        };
        assert_eq!(entry.ip_id_hex(), "0x03");

        let entry = IpTableEntry {
            program_ip_id: 0xAB,
            ..IpTableEntry::default()
        };
        assert_eq!(entry.ip_id_hex(), "0xAB");
    }

    #[test]
    fn test_decodes_snake_case_fields() {
        let json = r#"{"ProgramIpId":5,"remote_ip":"10.0.0.5","device_type":2,"Status":"ONLINE"}"#;
        let entry: IpTableEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.remote_ip, "10.0.0.5");
        assert_eq!(entry.device_type, 2);
        assert!(entry.is_online());
    }
}
