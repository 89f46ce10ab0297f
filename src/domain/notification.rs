use serde::{Deserialize, Serialize};

/// A user-facing notification, optionally annotated with vehicle or garage context.
///
/// `timestamp` and `kind` are open strings. No format or vocabulary is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub description: String,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<VehicleInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub garage: Option<GarageInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInfo {
    pub make: String,
    pub model: String,
    pub plate_number: String,
    /// Name of the garage the vehicle is attached to.
    pub garage: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarageInfo {
    pub name: String,
    pub address: String,
}

/// Which optional records a notification carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationContext {
    None,
    Vehicle,
    Garage,
    VehicleAndGarage,
}

impl NotificationContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Vehicle => "vehicle",
            Self::Garage => "garage",
            Self::VehicleAndGarage => "vehicle_and_garage",
        }
    }
}

impl Notification {
    /// Create an unread notification without vehicle or garage context.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        timestamp: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            timestamp: timestamp.into(),
            kind: kind.into(),
            read: false,
            vehicle: None,
            garage: None,
        }
    }

    pub fn with_vehicle(mut self, vehicle: VehicleInfo) -> Self {
        self.vehicle = Some(vehicle);
        self
    }

    pub fn with_garage(mut self, garage: GarageInfo) -> Self {
        self.garage = Some(garage);
        self
    }

    /// Returns `true` if the notification was unread before the call.
    pub fn mark_read(&mut self) -> bool {
        !std::mem::replace(&mut self.read, true)
    }

    /// Returns `true` if the notification was read before the call.
    pub fn mark_unread(&mut self) -> bool {
        std::mem::replace(&mut self.read, false)
    }

    pub fn context(&self) -> NotificationContext {
        match (&self.vehicle, &self.garage) {
            (None, None) => NotificationContext::None,
            (Some(_), None) => NotificationContext::Vehicle,
            (None, Some(_)) => NotificationContext::Garage,
            (Some(_), Some(_)) => NotificationContext::VehicleAndGarage,
        }
    }
}
