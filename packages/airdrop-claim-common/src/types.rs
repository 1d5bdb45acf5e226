use cosmwasm_schema::cw_serde;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of milestones an allocation is split across.
pub const NUM_ACTIONS: usize = 5;

/// A milestone whose completion releases `1 / NUM_ACTIONS` of an allocation.
/// The discriminant is the slot in `ActionCompleted`.
#[cw_serde]
#[derive(Copy, Eq, Hash, PartialOrd, Ord)]
pub enum ClaimAction {
    InitialClaim,
    MintNft,
    BidNft,
    Vote,
    DelegateStake,
}

impl ClaimAction {
    pub const ALL: [ClaimAction; NUM_ACTIONS] = [
        ClaimAction::InitialClaim,
        ClaimAction::MintNft,
        ClaimAction::BidNft,
        ClaimAction::Vote,
        ClaimAction::DelegateStake,
    ];

    pub fn index(self) -> usize {
        match self {
            ClaimAction::InitialClaim => 0,
            ClaimAction::MintNft => 1,
            ClaimAction::BidNft => 2,
            ClaimAction::Vote => 3,
            ClaimAction::DelegateStake => 4,
        }
    }

    /// Returns `None` for indices at or past `NUM_ACTIONS`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClaimAction::InitialClaim => "initial_claim",
            ClaimAction::MintNft => "mint_nft",
            ClaimAction::BidNft => "bid_nft",
            ClaimAction::Vote => "vote",
            ClaimAction::DelegateStake => "delegate_stake",
        }
    }
}

impl std::fmt::Display for ClaimAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-action completion flags. Entries only ever flip from `false` to `true`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(transparent)]
pub struct ActionCompleted([bool; NUM_ACTIONS]);

impl ActionCompleted {
    /// Builds the flags from an untyped list, which must hold exactly
    /// `NUM_ACTIONS` entries.
    pub fn from_flags(flags: &[bool]) -> Option<Self> {
        let flags: [bool; NUM_ACTIONS] = flags.try_into().ok()?;
        Some(Self(flags))
    }

    pub fn is_completed(&self, action: ClaimAction) -> bool {
        self.0[action.index()]
    }

    pub fn mark(&mut self, action: ClaimAction) {
        self.0[action.index()] = true;
    }

    pub fn all_completed(&self) -> bool {
        self.0.iter().all(|done| *done)
    }

    /// Actions not completed yet, in index order.
    pub fn pending(&self) -> impl Iterator<Item = ClaimAction> + '_ {
        ClaimAction::ALL
            .into_iter()
            .filter(move |action| !self.is_completed(*action))
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

/// Permission for a contract to trigger one action on behalf of a beneficiary.
#[cw_serde]
pub struct ClaimAuthorization {
    pub contract_address: String,
    pub action: ClaimAction,
}
