use super::session::ApplianceClient;
use crate::error::VcliResult;
use crate::types::iptable::IpTableResponse;
use crate::types::{sort_ip_table, IpTableEntry};

pub(crate) const IP_TABLE_BY_PID: &str = "IpTableByPID";

impl ApplianceClient {
    /// Devices mapped into one room, ordered by IP id.
    pub async fn ip_table(&self, room_id: &str) -> VcliResult<Vec<IpTableEntry>> {
        let path = format!("{}/{}", IP_TABLE_BY_PID, room_id);
        let response: IpTableResponse = self.get_json("get ip table", &path).await?;
        let mut entries = response.device.programs.ip_table_by_pid;
        sort_ip_table(&mut entries);
        Ok(entries)
    }
}
