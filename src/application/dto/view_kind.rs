/// The dashboard screens a request can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// Device inventory table
    Inventory,
    /// Service orders grouped into Kanban columns by status
    ServiceBoard,
    /// Service orders placed on a month grid
    Calendar,
    /// Firmware library table
    Firmware,
    /// Firmware download audit trail
    AuditLog,
    /// Compliance review queue
    Compliance,
    /// Static analytics series with derived totals
    Analytics,
}

impl ViewKind {
    pub fn all() -> &'static [ViewKind] {
        &[
            ViewKind::Inventory,
            ViewKind::ServiceBoard,
            ViewKind::Calendar,
            ViewKind::Firmware,
            ViewKind::AuditLog,
            ViewKind::Compliance,
            ViewKind::Analytics,
        ]
    }

    /// Heading shown above the rendered screen
    pub fn title(&self) -> &'static str {
        match self {
            ViewKind::Inventory => "Device Inventory",
            ViewKind::ServiceBoard => "Service Orders",
            ViewKind::Calendar => "Service Calendar",
            ViewKind::Firmware => "Firmware Library",
            ViewKind::AuditLog => "Download Audit Log",
            ViewKind::Compliance => "Compliance Review",
            ViewKind::Analytics => "Fleet Analytics",
        }
    }

    /// True for screens whose records are paginated
    pub fn is_paginated(&self) -> bool {
        matches!(
            self,
            ViewKind::Inventory | ViewKind::Firmware | ViewKind::AuditLog | ViewKind::Compliance
        )
    }
}

impl std::str::FromStr for ViewKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "inventory" | "devices" => Ok(ViewKind::Inventory),
            "service-board" | "kanban" => Ok(ViewKind::ServiceBoard),
            "calendar" => Ok(ViewKind::Calendar),
            "firmware" => Ok(ViewKind::Firmware),
            "audit-log" | "audit" => Ok(ViewKind::AuditLog),
            "compliance" => Ok(ViewKind::Compliance),
            "analytics" => Ok(ViewKind::Analytics),
            _ => Err(format!(
                "Invalid view: {}. Please specify one of: {}",
                s,
                ViewKind::all()
                    .iter()
                    .map(|kind| kind.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ViewKind::Inventory => "inventory",
            ViewKind::ServiceBoard => "service-board",
            ViewKind::Calendar => "calendar",
            ViewKind::Firmware => "firmware",
            ViewKind::AuditLog => "audit-log",
            ViewKind::Compliance => "compliance",
            ViewKind::Analytics => "analytics",
        };
        write!(f, "{}", name)
    }
}
