#![no_std]

multiversx_sc::imports!();

pub mod amm_proxy;
pub mod custody_proxy;
pub mod ledger_proxy;
pub mod types;

use types::{BeneficiaryRecord, Proposal, ProposalAction, ProposalStatus, VestingSchedule};

// ============================================================
// Constants
// ============================================================

/// Fixed supply: one billion tokens.
const TOTAL_SUPPLY_TOKENS: u64 = 1_000_000_000;

const TOKEN_DECIMALS: u32 = 18;

/// Share of supply wired to the treasury at deployment.
const TREASURY_SHARE_PERCENT: u64 = 10;

/// Share of supply wired to the presale address at deployment.
const PRESALE_SHARE_PERCENT: u64 = 40;

/// Share of supply paired with the attached EGLD when seeding.
const LIQUIDITY_SHARE_PERCENT: u64 = 15;

const TEAM_CATEGORY: &[u8] = b"team";
const INVESTOR_CATEGORY: &[u8] = b"investors";

/// Team allocation: 10% of supply, 180-day cliff, 365-day linear.
const TEAM_SHARE_PERCENT: u64 = 10;
const TEAM_CLIFF_SECONDS: u64 = 15_552_000;

/// Investor allocation: 15% of supply, 90-day cliff, 365-day linear.
const INVESTOR_SHARE_PERCENT: u64 = 15;
const INVESTOR_CLIFF_SECONDS: u64 = 7_776_000;

const VESTING_DURATION_SECONDS: u64 = 31_536_000;

/// Window given to the AMM before an add-liquidity call expires.
const LIQUIDITY_DEADLINE_SECONDS: u64 = 300;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait TokenCustody {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        ledger_address: ManagedAddress,
        amm_address: ManagedAddress,
        wrapped_native_address: ManagedAddress,
        treasury_address: ManagedAddress,
        presale_address: ManagedAddress,
        quorum: usize,
        signers: MultiValueEncoded<ManagedAddress>,
    ) {
        require!(
            ledger_address != ManagedAddress::zero()
                && amm_address != ManagedAddress::zero()
                && wrapped_native_address != ManagedAddress::zero()
                && treasury_address != ManagedAddress::zero()
                && presale_address != ManagedAddress::zero(),
            "Address cannot be zero"
        );

        for signer in signers.into_iter() {
            require!(signer != ManagedAddress::zero(), "Address cannot be zero");
            require!(self.signers().insert(signer), "Signer already exists");
        }
        let signer_count = self.signers().len();
        require!(signer_count > 0, "At least one signer required");
        require!(quorum >= 1 && quorum <= signer_count, "Invalid quorum");

        self.ledger_address().set(&ledger_address);
        self.amm_address().set(&amm_address);
        self.wrapped_native_address().set(&wrapped_native_address);
        self.treasury_address().set(&treasury_address);
        self.presale_address().set(&presale_address);
        self.quorum().set(quorum);
        self.total_supply()
            .set(BigUint::from(TOTAL_SUPPLY_TOKENS) * BigUint::from(10u64.pow(TOKEN_DECIMALS)));
        self.proposal_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINTS: proposal submission
    // One endpoint per action kind. Signer-only; each validates
    // its kind's preconditions before the proposal is appended,
    // and the execution handler re-validates at dispatch time.
    // ========================================================

    #[endpoint(proposeDeployDistribution)]
    #[payable("EGLD")]
    fn propose_deploy_distribution(&self) -> u64 {
        let caller = self.require_caller_is_signer();
        require!(!self.deployed().get(), "Distribution already deployed");

        let attached_value = self.call_value().egld_value().clone_value();
        self.submit_proposal(caller, ProposalAction::DeployDistribution, attached_value)
    }

    #[endpoint(proposeSeedLiquidity)]
    #[payable("EGLD")]
    fn propose_seed_liquidity(&self) -> u64 {
        let caller = self.require_caller_is_signer();
        require!(!self.liquidity_seeded().get(), "Liquidity already seeded");

        let attached_value = self.call_value().egld_value().clone_value();
        require!(attached_value > 0u64, "Liquidity value required");
        self.submit_proposal(caller, ProposalAction::SeedLiquidity, attached_value)
    }

    #[endpoint(proposeRegisterBeneficiary)]
    fn propose_register_beneficiary(
        &self,
        category: ManagedBuffer,
        beneficiary: ManagedAddress,
        share: u64,
    ) -> u64 {
        let caller = self.require_caller_is_signer();
        require!(
            !self.vesting_schedules(&category).is_empty(),
            "Unknown vesting category"
        );
        require!(share > 0 && share <= 100, "Invalid share");
        require!(
            beneficiary != ManagedAddress::zero(),
            "Address cannot be zero"
        );
        require!(
            self.beneficiaries(&beneficiary).is_empty(),
            "Beneficiary already registered"
        );
        let schedule = self.vesting_schedules(&category).get();
        require!(
            schedule.allocated_share_sum + share <= 100,
            "Allocation cap exceeded"
        );

        self.submit_proposal(
            caller,
            ProposalAction::RegisterBeneficiary(category, beneficiary, share),
            BigUint::zero(),
        )
    }

    #[endpoint(proposeAddSigner)]
    fn propose_add_signer(&self, signer: ManagedAddress, new_quorum: usize) -> u64 {
        let caller = self.require_caller_is_signer();
        require!(signer != ManagedAddress::zero(), "Address cannot be zero");
        require!(!self.signers().contains(&signer), "Signer already exists");
        let post_add_count = self.signers().len() + 1;
        require!(
            new_quorum >= 1 && new_quorum <= post_add_count,
            "Invalid quorum"
        );

        self.submit_proposal(
            caller,
            ProposalAction::AddSigner(signer, new_quorum),
            BigUint::zero(),
        )
    }

    #[endpoint(proposeRemoveSigner)]
    fn propose_remove_signer(&self, signer: ManagedAddress) -> u64 {
        let caller = self.require_caller_is_signer();
        require!(self.signers().contains(&signer), "Not a signer");
        require!(self.signers().len() > 1, "Cannot remove the last signer");

        self.submit_proposal(caller, ProposalAction::RemoveSigner(signer), BigUint::zero())
    }

    #[endpoint(proposeChangeQuorum)]
    fn propose_change_quorum(&self, new_quorum: usize) -> u64 {
        let caller = self.require_caller_is_signer();
        require!(
            new_quorum >= 1 && new_quorum <= self.signers().len(),
            "Invalid quorum"
        );

        self.submit_proposal(caller, ProposalAction::ChangeQuorum(new_quorum), BigUint::zero())
    }

    // ========================================================
    // ENDPOINT: approve
    // One vote per signer per proposal. Reaching quorum executes
    // the proposal synchronously within the same call.
    // ========================================================

    #[endpoint(approve)]
    fn approve(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        require!(self.signers().contains(&caller), "Only signers may approve");
        require!(
            !self.proposals(proposal_id).is_empty(),
            "Proposal does not exist"
        );

        let mut proposal = self.proposals(proposal_id).get();
        require!(
            proposal.status == ProposalStatus::Pending,
            "Proposal is not pending"
        );
        require!(
            !self.has_approved(proposal_id, &caller).get(),
            "Already approved"
        );

        self.has_approved(proposal_id, &caller).set(true);
        proposal.approval_count += 1;
        self.proposals(proposal_id).set(&proposal);

        self.proposal_approved_event(proposal_id, &caller, proposal.approval_count);

        if proposal.approval_count >= self.quorum().get() {
            self.execute_pending_proposal(proposal_id, proposal);
        }
    }

    // ========================================================
    // ENDPOINT: execute
    // Explicit re-trigger for a pending proposal that already
    // holds enough approvals (e.g. after the quorum was lowered,
    // or after a failed execution was rolled back).
    // ========================================================

    #[endpoint(execute)]
    fn execute(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        require!(self.signers().contains(&caller), "Only signers may execute");
        require!(
            !self.proposals(proposal_id).is_empty(),
            "Proposal does not exist"
        );

        let proposal = self.proposals(proposal_id).get();
        require!(
            proposal.status == ProposalStatus::Pending,
            "Proposal is not pending"
        );
        require!(
            proposal.approval_count >= self.quorum().get(),
            "Insufficient approvals"
        );

        self.execute_pending_proposal(proposal_id, proposal);
    }

    // ========================================================
    // ENDPOINT: cancel
    // Marks the proposal Cancelled and refunds the escrowed EGLD
    // to the canceller. A failed refund aborts the whole call.
    // ========================================================

    #[endpoint(cancel)]
    fn cancel(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        require!(self.signers().contains(&caller), "Only signers may cancel");
        require!(
            !self.proposals(proposal_id).is_empty(),
            "Proposal does not exist"
        );

        let mut proposal = self.proposals(proposal_id).get();
        require!(
            proposal.status == ProposalStatus::Pending,
            "Proposal is not pending"
        );

        proposal.status = ProposalStatus::Cancelled;
        self.proposals(proposal_id).set(&proposal);

        if proposal.attached_value > 0u64 {
            self.send().direct_egld(&caller, &proposal.attached_value);
        }

        self.proposal_cancelled_event(proposal_id, &caller);
    }

    // ========================================================
    // ENDPOINT: claim
    // Beneficiaries pull their vested allocation directly; the
    // ledger transfer runs under the reentrancy guard, after the
    // claimed amount has been recorded.
    // ========================================================

    #[endpoint(claim)]
    fn claim(&self) {
        self.acquire_call_guard();

        let caller = self.blockchain().get_caller();
        require!(!self.beneficiaries(&caller).is_empty(), "Nothing to claim");

        let mut record = self.beneficiaries(&caller).get();
        let now = self.blockchain().get_block_timestamp();
        let amount = self.compute_claimable(&record, now);
        require!(amount > 0u64, "Nothing to claim");

        record.total_claimed += &amount;
        self.beneficiaries(&caller).set(&record);

        self.ledger_transfer(&caller, &amount);

        self.vesting_claimed_event(&caller, &record.category, &amount);
        self.release_call_guard();
    }

    // ========================================================
    // INTERNAL: proposal lifecycle
    // ========================================================

    fn require_caller_is_signer(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(self.signers().contains(&caller), "Only signers may propose");
        caller
    }

    fn submit_proposal(
        &self,
        proposer: ManagedAddress,
        action: ProposalAction<Self::Api>,
        attached_value: BigUint,
    ) -> u64 {
        let proposal_id = self.proposal_count().get() + 1u64;
        let proposal = Proposal {
            id: proposal_id,
            proposer: proposer.clone(),
            action,
            attached_value,
            approval_count: 0,
            status: ProposalStatus::Pending,
            created_at: self.blockchain().get_block_timestamp(),
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);

        self.proposal_submitted_event(
            proposal_id,
            &proposer,
            &proposal.attached_value,
            &proposal.action,
        );

        proposal_id
    }

    /// Marks the proposal Executed before dispatching, so a call
    /// reentering through an external collaborator finds no pending
    /// proposal to re-trigger.
    fn execute_pending_proposal(&self, proposal_id: u64, mut proposal: Proposal<Self::Api>) {
        proposal.status = ProposalStatus::Executed;
        self.proposals(proposal_id).set(&proposal);

        match &proposal.action {
            ProposalAction::DeployDistribution => {
                self.perform_deploy(&proposal.attached_value);
            }
            ProposalAction::SeedLiquidity => {
                self.perform_seed_liquidity(&proposal.attached_value);
            }
            ProposalAction::RegisterBeneficiary(category, beneficiary, share) => {
                self.perform_register_beneficiary(category, beneficiary, *share);
            }
            ProposalAction::AddSigner(signer, new_quorum) => {
                self.perform_add_signer(signer, *new_quorum);
            }
            ProposalAction::RemoveSigner(signer) => {
                self.perform_remove_signer(signer);
            }
            ProposalAction::ChangeQuorum(new_quorum) => {
                self.perform_change_quorum(*new_quorum);
            }
        }

        self.proposal_executed_event(proposal_id);
    }

    // ========================================================
    // INTERNAL: signer registry
    // ========================================================

    fn perform_add_signer(&self, signer: &ManagedAddress, new_quorum: usize) {
        require!(signer != &ManagedAddress::zero(), "Address cannot be zero");
        require!(self.signers().insert(signer.clone()), "Signer already exists");

        let signer_count = self.signers().len();
        require!(
            new_quorum >= 1 && new_quorum <= signer_count,
            "Invalid quorum"
        );
        let old_quorum = self.quorum().get();
        if new_quorum != old_quorum {
            self.quorum().set(new_quorum);
            self.quorum_changed_event(old_quorum, new_quorum);
        }

        self.signer_added_event(signer);
    }

    fn perform_remove_signer(&self, signer: &ManagedAddress) {
        require!(self.signers().len() > 1, "Cannot remove the last signer");
        require!(self.signers().swap_remove(signer), "Not a signer");

        // The quorum must stay reachable by the shrunken set.
        let signer_count = self.signers().len();
        let old_quorum = self.quorum().get();
        if old_quorum > signer_count {
            self.quorum().set(signer_count);
            self.quorum_changed_event(old_quorum, signer_count);
        }

        self.signer_removed_event(signer);
    }

    fn perform_change_quorum(&self, new_quorum: usize) {
        require!(
            new_quorum >= 1 && new_quorum <= self.signers().len(),
            "Invalid quorum"
        );
        let old_quorum = self.quorum().get();
        self.quorum().set(new_quorum);
        self.quorum_changed_event(old_quorum, new_quorum);
    }

    // ========================================================
    // INTERNAL: vesting ledger
    // ========================================================

    fn create_vesting_category(
        &self,
        label: ManagedBuffer,
        cliff_duration: u64,
        vesting_duration: u64,
        start_time: u64,
        category_share: u64,
    ) {
        require!(
            self.vesting_schedules(&label).is_empty(),
            "Vesting category already exists"
        );
        require!(
            category_share > 0 && category_share <= 100,
            "Invalid category share"
        );
        require!(vesting_duration > 0, "Invalid vesting duration");

        let schedule = VestingSchedule {
            cliff_duration,
            vesting_duration,
            start_time,
            category_share,
            allocated_share_sum: 0,
        };
        self.vesting_schedules(&label).set(&schedule);

        self.category_created_event(
            &label,
            cliff_duration,
            vesting_duration,
            start_time,
            category_share,
        );
    }

    fn perform_register_beneficiary(
        &self,
        category: &ManagedBuffer,
        beneficiary: &ManagedAddress,
        share: u64,
    ) {
        require!(
            !self.vesting_schedules(category).is_empty(),
            "Unknown vesting category"
        );
        require!(share > 0 && share <= 100, "Invalid share");
        require!(
            beneficiary != &ManagedAddress::zero(),
            "Address cannot be zero"
        );
        require!(
            self.beneficiaries(beneficiary).is_empty(),
            "Beneficiary already registered"
        );

        let mut schedule = self.vesting_schedules(category).get();
        require!(
            schedule.allocated_share_sum + share <= 100,
            "Allocation cap exceeded"
        );
        schedule.allocated_share_sum += share;
        self.vesting_schedules(category).set(&schedule);

        let record = BeneficiaryRecord {
            category: category.clone(),
            share,
            total_claimed: BigUint::zero(),
        };
        self.beneficiaries(beneficiary).set(&record);

        self.beneficiary_registered_event(category, beneficiary, share);
    }

    /// Allocation math uses two successive truncating percentage
    /// divisions; the compounding rounding loss is part of the
    /// numeric contract.
    fn compute_claimable(&self, record: &BeneficiaryRecord<Self::Api>, now: u64) -> BigUint {
        let schedule = self.vesting_schedules(&record.category).get();

        let category_pool = self.total_supply().get() * schedule.category_share / 100u64;
        let total_allocation = category_pool * record.share / 100u64;

        let cliff_end = schedule.start_time + schedule.cliff_duration;
        let vested = if now < cliff_end {
            BigUint::zero()
        } else if now >= cliff_end + schedule.vesting_duration {
            total_allocation
        } else {
            total_allocation * (now - cliff_end) / schedule.vesting_duration
        };

        vested - &record.total_claimed
    }

    // ========================================================
    // INTERNAL: distribution orchestration
    // ========================================================

    fn perform_deploy(&self, liquidity_value: &BigUint) {
        require!(!self.deployed().get(), "Distribution already deployed");
        self.acquire_call_guard();
        self.deployed().set(true);

        let ledger = self.ledger_address().get();
        let own_address = self.blockchain().get_sc_address();
        let total_supply = self.total_supply().get();

        self.tx()
            .to(&ledger)
            .typed(ledger_proxy::AssetLedgerProxy)
            .mint(&own_address, &total_supply)
            .sync_call();

        let treasury = self.treasury_address().get();
        let presale = self.presale_address().get();
        let treasury_amount = &total_supply * TREASURY_SHARE_PERCENT / 100u64;
        let presale_amount = &total_supply * PRESALE_SHARE_PERCENT / 100u64;
        self.ledger_transfer(&treasury, &treasury_amount);
        self.ledger_transfer(&presale, &presale_amount);

        let amm = self.amm_address().get();
        let factory: ManagedAddress = self
            .tx()
            .to(&amm)
            .typed(amm_proxy::AmmProxy)
            .factory()
            .returns(ReturnsResult)
            .sync_call();
        let pair_address: ManagedAddress = self
            .tx()
            .to(&factory)
            .typed(amm_proxy::AmmProxy)
            .create_pair(&ledger, &self.wrapped_native_address().get())
            .returns(ReturnsResult)
            .sync_call();
        self.pair_address().set(&pair_address);

        self.tx()
            .to(&ledger)
            .typed(ledger_proxy::AssetLedgerProxy)
            .set_fee_exemption(&own_address, true)
            .sync_call();
        self.tx()
            .to(&ledger)
            .typed(ledger_proxy::AssetLedgerProxy)
            .set_pool_address(&pair_address, true)
            .sync_call();

        if *liquidity_value > 0u64 {
            self.add_pool_liquidity(liquidity_value);
        }

        let now = self.blockchain().get_block_timestamp();
        self.create_vesting_category(
            ManagedBuffer::from(TEAM_CATEGORY),
            TEAM_CLIFF_SECONDS,
            VESTING_DURATION_SECONDS,
            now,
            TEAM_SHARE_PERCENT,
        );
        self.create_vesting_category(
            ManagedBuffer::from(INVESTOR_CATEGORY),
            INVESTOR_CLIFF_SECONDS,
            VESTING_DURATION_SECONDS,
            now,
            INVESTOR_SHARE_PERCENT,
        );

        self.distribution_deployed_event(&pair_address, liquidity_value);
        self.release_call_guard();
    }

    fn perform_seed_liquidity(&self, liquidity_value: &BigUint) {
        require!(self.deployed().get(), "Distribution not deployed");
        require!(!self.liquidity_seeded().get(), "Liquidity already seeded");
        self.acquire_call_guard();

        self.add_pool_liquidity(liquidity_value);
        self.release_call_guard();
    }

    /// Shared by the deploy path (guard already held) and the
    /// standalone seeding handler.
    fn add_pool_liquidity(&self, liquidity_value: &BigUint) {
        self.liquidity_seeded().set(true);

        let token_amount = self.total_supply().get() * LIQUIDITY_SHARE_PERCENT / 100u64;
        let ledger = self.ledger_address().get();
        let amm = self.amm_address().get();

        self.tx()
            .to(&ledger)
            .typed(ledger_proxy::AssetLedgerProxy)
            .approve(&amm, &token_amount)
            .sync_call();

        let deadline = self.blockchain().get_block_timestamp() + LIQUIDITY_DEADLINE_SECONDS;
        let treasury = self.treasury_address().get();
        let (used_token, used_native, _shares) = self
            .tx()
            .to(&amm)
            .typed(amm_proxy::AmmProxy)
            .add_liquidity_native(
                &ledger,
                &token_amount,
                &BigUint::zero(),
                &BigUint::zero(),
                &treasury,
                deadline,
            )
            .egld(liquidity_value)
            .returns(ReturnsResult)
            .sync_call()
            .into_tuple();

        self.liquidity_seeded_event(&used_token, &used_native);
    }

    fn ledger_transfer(&self, to: &ManagedAddress, amount: &BigUint) {
        let ledger = self.ledger_address().get();
        let transferred: bool = self
            .tx()
            .to(&ledger)
            .typed(ledger_proxy::AssetLedgerProxy)
            .transfer(to, amount)
            .returns(ReturnsResult)
            .sync_call();
        require!(transferred, "Ledger transfer failed");
    }

    // ========================================================
    // INTERNAL: reentrancy guard
    // ========================================================

    fn acquire_call_guard(&self) {
        require!(!self.call_guard().get(), "Reentrant call");
        self.call_guard().set(true);
    }

    fn release_call_guard(&self) {
        self.call_guard().set(false);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            !self.proposals(proposal_id).is_empty(),
            "Proposal does not exist"
        );
        self.proposals(proposal_id).get()
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposal_count().get()
    }

    #[view(getPendingProposals)]
    fn get_pending_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for proposal_id in 1..=self.proposal_count().get() {
            let proposal = self.proposals(proposal_id).get();
            if proposal.status == ProposalStatus::Pending {
                result.push(proposal);
            }
        }
        result
    }

    #[view(hasApproved)]
    fn get_has_approved(&self, proposal_id: u64, signer: ManagedAddress) -> bool {
        self.has_approved(proposal_id, &signer).get()
    }

    #[view(getSigners)]
    fn get_signers(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for signer in self.signers().iter() {
            result.push(signer);
        }
        result
    }

    #[view(getQuorum)]
    fn get_quorum(&self) -> usize {
        self.quorum().get()
    }

    #[view(isSigner)]
    fn is_signer(&self, address: ManagedAddress) -> bool {
        self.signers().contains(&address)
    }

    #[view(getClaimable)]
    fn get_claimable(&self, address: ManagedAddress) -> BigUint {
        if self.beneficiaries(&address).is_empty() {
            return BigUint::zero();
        }
        let record = self.beneficiaries(&address).get();
        self.compute_claimable(&record, self.blockchain().get_block_timestamp())
    }

    #[view(getVestingSchedule)]
    fn get_vesting_schedule(&self, label: ManagedBuffer) -> VestingSchedule {
        require!(
            !self.vesting_schedules(&label).is_empty(),
            "Unknown vesting category"
        );
        self.vesting_schedules(&label).get()
    }

    #[view(getBeneficiary)]
    fn get_beneficiary(&self, address: ManagedAddress) -> BeneficiaryRecord<Self::Api> {
        require!(
            !self.beneficiaries(&address).is_empty(),
            "Beneficiary not registered"
        );
        self.beneficiaries(&address).get()
    }

    #[view(isDeployed)]
    fn is_deployed(&self) -> bool {
        self.deployed().get()
    }

    #[view(isLiquiditySeeded)]
    fn is_liquidity_seeded(&self) -> bool {
        self.liquidity_seeded().get()
    }

    #[view(getPairAddress)]
    fn get_pair_address(&self) -> ManagedAddress {
        self.pair_address().get()
    }

    #[view(getTotalSupply)]
    fn get_total_supply(&self) -> BigUint {
        self.total_supply().get()
    }

    #[view(getDistributionConfig)]
    fn get_distribution_config(
        &self,
    ) -> MultiValue5<ManagedAddress, ManagedAddress, ManagedAddress, ManagedAddress, ManagedAddress>
    {
        (
            self.ledger_address().get(),
            self.amm_address().get(),
            self.wrapped_native_address().get(),
            self.treasury_address().get(),
            self.presale_address().get(),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("proposalSubmitted")]
    fn proposal_submitted_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] attached_value: &BigUint,
        action: &ProposalAction<Self::Api>,
    );

    #[event("proposalApproved")]
    fn proposal_approved_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] signer: &ManagedAddress,
        approval_count: usize,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(&self, #[indexed] proposal_id: u64);

    #[event("proposalCancelled")]
    fn proposal_cancelled_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] canceller: &ManagedAddress,
    );

    #[event("signerAdded")]
    fn signer_added_event(&self, #[indexed] signer: &ManagedAddress);

    #[event("signerRemoved")]
    fn signer_removed_event(&self, #[indexed] signer: &ManagedAddress);

    #[event("quorumChanged")]
    fn quorum_changed_event(&self, #[indexed] old_quorum: usize, #[indexed] new_quorum: usize);

    #[event("categoryCreated")]
    fn category_created_event(
        &self,
        #[indexed] label: &ManagedBuffer,
        #[indexed] cliff_duration: u64,
        #[indexed] vesting_duration: u64,
        #[indexed] start_time: u64,
        category_share: u64,
    );

    #[event("beneficiaryRegistered")]
    fn beneficiary_registered_event(
        &self,
        #[indexed] category: &ManagedBuffer,
        #[indexed] beneficiary: &ManagedAddress,
        share: u64,
    );

    #[event("vestingClaimed")]
    fn vesting_claimed_event(
        &self,
        #[indexed] beneficiary: &ManagedAddress,
        #[indexed] category: &ManagedBuffer,
        amount: &BigUint,
    );

    #[event("distributionDeployed")]
    fn distribution_deployed_event(
        &self,
        #[indexed] pair_address: &ManagedAddress,
        liquidity_value: &BigUint,
    );

    #[event("liquiditySeeded")]
    fn liquidity_seeded_event(
        &self,
        #[indexed] token_amount: &BigUint,
        native_amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Collaborators & distribution targets ──

    #[storage_mapper("ledgerAddress")]
    fn ledger_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("ammAddress")]
    fn amm_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("wrappedNativeAddress")]
    fn wrapped_native_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("treasuryAddress")]
    fn treasury_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("presaleAddress")]
    fn presale_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    // ── Signer registry ──

    #[storage_mapper("signers")]
    fn signers(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("quorum")]
    fn quorum(&self) -> SingleValueMapper<usize>;

    // ── Proposal log (append-only, 1-based ids) ──

    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("hasApproved")]
    fn has_approved(
        &self,
        proposal_id: u64,
        signer: &ManagedAddress,
    ) -> SingleValueMapper<bool>;

    // ── Vesting ledger ──

    #[storage_mapper("vestingSchedules")]
    fn vesting_schedules(&self, label: &ManagedBuffer) -> SingleValueMapper<VestingSchedule>;

    #[storage_mapper("beneficiaries")]
    fn beneficiaries(
        &self,
        address: &ManagedAddress,
    ) -> SingleValueMapper<BeneficiaryRecord<Self::Api>>;

    // ── Distribution state ──

    #[storage_mapper("deployed")]
    fn deployed(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("liquiditySeeded")]
    fn liquidity_seeded(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("pairAddress")]
    fn pair_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("callGuard")]
    fn call_guard(&self) -> SingleValueMapper<bool>;
}
