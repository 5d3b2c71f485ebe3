//! The fixed catalogue of provider operations.
//!
//! This is the compatibility contract with the provider: each entry names a
//! method on the entry-point type, the parameter kinds that discriminate it
//! when the name is overloaded, and the expected return kind. The catalogue
//! is versioned with the adapter; a provider release may satisfy any subset
//! of it.

use crate::value::ValueKind;

/// Logical operations the adapter binds against the provider.
///
/// Provider-side overloads appear as distinct entries so each binds and
/// fails independently across provider versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationId {
    GetVersion,
    RegisterRibbon,
    RegisterCustomRibbon,
    AwardByCode,
    AwardByRibbon,
    AwardAllByCode,
    AwardAllByRibbon,
    IsAwardedByCode,
    IsAwardedByRibbon,
    MissionsFlown,
    Dockings,
    Research,
    TotalMissionTime,
    ContractsCompleted,
}

/// Name and shape of one provider operation.
#[derive(Debug, Clone, Copy)]
pub struct OperationSignature {
    /// Method name on the provider's entry-point type.
    pub name: &'static str,
    /// Parameter kinds; `None` resolves by name alone.
    pub params: Option<&'static [ValueKind]>,
    /// Expected return kind; any other kind is a call failure.
    pub returns: ValueKind,
}

impl OperationSignature {
    /// Render the signature for diagnostics, e.g.
    /// `AwardRibbonToKerbal(Text, Crew)`.
    pub fn describe(&self) -> String {
        match self.params {
            Some(params) => {
                let list = params
                    .iter()
                    .map(|k| k.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}({})", self.name, list)
            }
            None => format!("{}()", self.name),
        }
    }
}

impl OperationId {
    /// Every operation in the catalogue.
    pub const ALL: [OperationId; 14] = [
        OperationId::GetVersion,
        OperationId::RegisterRibbon,
        OperationId::RegisterCustomRibbon,
        OperationId::AwardByCode,
        OperationId::AwardByRibbon,
        OperationId::AwardAllByCode,
        OperationId::AwardAllByRibbon,
        OperationId::IsAwardedByCode,
        OperationId::IsAwardedByRibbon,
        OperationId::MissionsFlown,
        OperationId::Dockings,
        OperationId::Research,
        OperationId::TotalMissionTime,
        OperationId::ContractsCompleted,
    ];

    /// The operation's provider-side signature.
    pub fn signature(self) -> OperationSignature {
        use ValueKind::*;
        match self {
            OperationId::GetVersion => OperationSignature {
                name: "GetVersion",
                params: None,
                returns: Text,
            },
            OperationId::RegisterRibbon => OperationSignature {
                name: "RegisterRibbon",
                params: None,
                returns: Ribbon,
            },
            OperationId::RegisterCustomRibbon => OperationSignature {
                name: "RegisterCustomRibbon",
                params: None,
                returns: Ribbon,
            },
            OperationId::AwardByCode => OperationSignature {
                name: "AwardRibbonToKerbal",
                params: Some(&[Text, Crew]),
                returns: Unit,
            },
            OperationId::AwardByRibbon => OperationSignature {
                name: "AwardRibbonToKerbal",
                params: Some(&[Ribbon, Crew]),
                returns: Unit,
            },
            OperationId::AwardAllByCode => OperationSignature {
                name: "AwardRibbonToKerbals",
                params: Some(&[Text, CrewList]),
                returns: Unit,
            },
            OperationId::AwardAllByRibbon => OperationSignature {
                name: "AwardRibbonToKerbals",
                params: Some(&[Ribbon, CrewList]),
                returns: Unit,
            },
            OperationId::IsAwardedByCode => OperationSignature {
                name: "IsRibbonAwardedToKerbal",
                params: Some(&[Text, Crew]),
                returns: Bool,
            },
            OperationId::IsAwardedByRibbon => OperationSignature {
                name: "IsRibbonAwardedToKerbal",
                params: Some(&[Ribbon, Crew]),
                returns: Bool,
            },
            OperationId::MissionsFlown => OperationSignature {
                name: "GetMissionsFlownForKerbal",
                params: None,
                returns: Int,
            },
            OperationId::Dockings => OperationSignature {
                name: "GetDockingsForKerbal",
                params: None,
                returns: Int,
            },
            OperationId::Research => OperationSignature {
                name: "GetResearchForKerbal",
                params: None,
                returns: Float,
            },
            OperationId::TotalMissionTime => OperationSignature {
                name: "GetTotalMissionTimeForKerbal",
                params: None,
                returns: Float,
            },
            OperationId::ContractsCompleted => OperationSignature {
                name: "GetContractsCompletedForKerbal",
                params: None,
                returns: Int,
            },
        }
    }
}
