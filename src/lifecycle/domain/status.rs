use crate::shared::error::ViewError;
use serde::{Deserialize, Serialize};

/// Behaviour shared by every closed status/category set.
///
/// Labels are the strings shown on the dashboard and used in dataset files.
/// Parsing is case-insensitive and treats `-`/`_` as spaces, so
/// `in-progress` and `3rd_party` are accepted from the command line.
pub trait StatusLabel: Copy + Sized + 'static {
    /// Name of the status family used in error messages (e.g. "device")
    const KIND: &'static str;

    /// Every member of the set, in display order
    fn all() -> &'static [Self];

    /// The display label of this member
    fn label(&self) -> &'static str;

    /// Parses a label into a member of the set.
    ///
    /// # Errors
    /// Returns `ViewError::UnknownStatus` listing the accepted labels when
    /// the value is not part of the set.
    fn parse_label(value: &str) -> Result<Self, ViewError> {
        let wanted = normalize_label(value);
        Self::all()
            .iter()
            .copied()
            .find(|status| normalize_label(status.label()) == wanted)
            .ok_or_else(|| ViewError::UnknownStatus {
                kind: Self::KIND,
                value: value.to_string(),
                expected: Self::all()
                    .iter()
                    .map(|status| status.label())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

fn normalize_label(value: &str) -> String {
    value.to_lowercase().replace(['-', '_'], " ")
}

/// Declares a closed status enum with serde labels, `Display` and `FromStr`.
macro_rules! closed_status {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl StatusLabel for $name {
            const KIND: &'static str = $kind;

            fn all() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ViewError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse_label(s)
            }
        }
    };
}

closed_status! {
    /// Operational state of a managed device
    DeviceStatus("device") {
        Online => "Online",
        Offline => "Offline",
        Maintenance => "Maintenance",
    }
}

closed_status! {
    /// Lifecycle bucket of a service order (one Kanban column each)
    OrderStatus("service order") {
        Scheduled => "Scheduled",
        InProgress => "In Progress",
        Completed => "Completed",
    }
}

closed_status! {
    /// Who performs a service order
    OrderType("service order type") {
        Internal => "Internal",
        ThirdParty => "3rd Party",
    }
}

closed_status! {
    Priority("priority") {
        High => "High",
        Medium => "Medium",
        Low => "Low",
    }
}

closed_status! {
    /// Release approval state shared by firmware versions and compliance reviews
    ApprovalStatus("approval") {
        Approved => "Approved",
        Pending => "Pending",
        Deprecated => "Deprecated",
    }
}

closed_status! {
    /// Outcome of an audited firmware action
    AuditOutcome("audit") {
        Success => "Success",
        Failed => "Failed",
    }
}
