//! 服务接口数据模型

use serde::Deserialize;

/// 通用响应包装 `{data: {...}}`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiData<T> {
    pub data: Option<T>,
}

/// 排队状态快照：各充电桩及其队列中的车辆
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueueSnapshot {
    #[serde(default)]
    pub piles: Vec<PileQueue>,
}

/// 单个充电桩的排队队列
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PileQueue {
    pub pile_id: String,

    #[serde(default)]
    pub queue_vehicles: Vec<QueueVehicle>,
}

/// 排队中的车辆
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueVehicle {
    pub vehicle_id: String,

    #[serde(default)]
    pub current_charged_capacity: f64,

    #[serde(default)]
    pub current_fee: f64,
}

/// 等候区快照（该接口的车辆列表位于响应顶层）
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitingSnapshot {
    #[serde(default)]
    pub waiting_vehicles: Vec<WaitingVehicle>,
}

/// 等候区车辆
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitingVehicle {
    pub license_plate: String,

    pub request_type: String,

    #[serde(default)]
    pub requested_capacity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_snapshot_deserialization() {
        let json = r#"{
            "data": {
                "piles": [
                    {
                        "pileId": "T1",
                        "queueVehicles": [
                            {
                                "vehicleId": "V1",
                                "currentChargedCapacity": 3.5,
                                "currentFee": 10.2
                            }
                        ]
                    },
                    {
                        "pileId": "T2",
                        "queueVehicles": []
                    }
                ]
            }
        }"#;

        let envelope: ApiData<QueueSnapshot> = serde_json::from_str(json).unwrap();
        let snapshot = envelope.data.unwrap();

        assert_eq!(snapshot.piles.len(), 2);
        assert_eq!(snapshot.piles[0].pile_id, "T1");
        assert_eq!(snapshot.piles[0].queue_vehicles[0].vehicle_id, "V1");
        assert_eq!(
            snapshot.piles[0].queue_vehicles[0].current_charged_capacity,
            3.5
        );
        assert!(snapshot.piles[1].queue_vehicles.is_empty());
    }

    #[test]
    fn test_waiting_snapshot_deserialization() {
        let json = r#"{
            "waitingVehicles": [
                {
                    "licensePlate": "V3",
                    "requestType": "slow",
                    "requestedCapacity": 7
                }
            ]
        }"#;

        let snapshot: WaitingSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.waiting_vehicles.len(), 1);
        assert_eq!(snapshot.waiting_vehicles[0].license_plate, "V3");
        assert_eq!(snapshot.waiting_vehicles[0].request_type, "slow");
        assert_eq!(snapshot.waiting_vehicles[0].requested_capacity, 7.0);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let snapshot: WaitingSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.waiting_vehicles.is_empty());

        let envelope: ApiData<QueueSnapshot> = serde_json::from_str("{}").unwrap();
        assert!(envelope.data.is_none());
    }
}
