multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Open for approvals. Executes as soon as quorum is reached.
    Pending,
    /// Dispatched to its handler. Terminal state.
    Executed,
    /// Withdrawn by a signer before execution. Terminal state.
    Cancelled,
}

// ============================================================
// Proposal Action — one strongly-typed variant per kind
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum ProposalAction<M: ManagedTypeApi> {
    /// Run the one-shot token distribution, optionally seeding
    /// liquidity with the EGLD escrowed at submission.
    DeployDistribution,
    /// Seed the AMM pool with the EGLD escrowed at submission.
    SeedLiquidity,
    /// Register a beneficiary: category label, address, share of
    /// the category pool (1-100).
    RegisterBeneficiary(ManagedBuffer<M>, ManagedAddress<M>, u64),
    /// Add a signer and set the quorum valid for the grown set.
    AddSigner(ManagedAddress<M>, usize),
    RemoveSigner(ManagedAddress<M>),
    ChangeQuorum(usize),
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub action: ProposalAction<M>,
    /// EGLD escrowed with the proposal. Nonzero only for the
    /// distribution and liquidity-seeding kinds; refunded on cancel.
    pub attached_value: BigUint<M>,
    pub approval_count: usize,
    pub status: ProposalStatus,
    pub created_at: u64,
}

// ============================================================
// Vesting records
// ============================================================

/// Per-category schedule. Immutable after creation except for
/// `allocated_share_sum`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct VestingSchedule {
    pub cliff_duration: u64,
    /// Linear release period that starts once the cliff ends.
    pub vesting_duration: u64,
    pub start_time: u64,
    /// Percent of total supply allocated to this category (1-100).
    pub category_share: u64,
    /// Sum of beneficiary shares registered so far, capped at 100.
    pub allocated_share_sum: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct BeneficiaryRecord<M: ManagedTypeApi> {
    pub category: ManagedBuffer<M>,
    /// Percent of the category pool owed to this beneficiary (1-100).
    pub share: u64,
    pub total_claimed: BigUint<M>,
}
