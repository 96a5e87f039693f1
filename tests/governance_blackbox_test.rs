// Multisig lifecycle tests: submission, approval, threshold-triggered
// execution, cancellation, and signer-registry proposals.

use multiversx_sc_scenario::imports::*;

use token_custody::custody_proxy;
use token_custody::types::{Proposal, ProposalStatus};

use amm_mock::amm_mock_proxy;
use ledger_mock::ledger_mock_proxy;

const CUSTODY_CODE: MxscPath = MxscPath::new("output/token-custody.mxsc.json");
const LEDGER_CODE: MxscPath = MxscPath::new("../ledger-mock/output/ledger-mock.mxsc.json");
const AMM_CODE: MxscPath = MxscPath::new("../amm-mock/output/amm-mock.mxsc.json");

const OWNER: TestAddress = TestAddress::new("owner");
const ALICE: TestAddress = TestAddress::new("alice");
const BOB: TestAddress = TestAddress::new("bob");
const CAROL: TestAddress = TestAddress::new("carol");
const DAVE: TestAddress = TestAddress::new("dave");
const TREASURY: TestAddress = TestAddress::new("treasury");
const PRESALE: TestAddress = TestAddress::new("presale");
const WRAPPED_NATIVE: TestAddress = TestAddress::new("wrapped-native");
const PAIR: TestAddress = TestAddress::new("pair");

const CUSTODY_ADDRESS: TestSCAddress = TestSCAddress::new("custody");
const LEDGER_ADDRESS: TestSCAddress = TestSCAddress::new("ledger");
const AMM_ADDRESS: TestSCAddress = TestSCAddress::new("amm");

const INITIAL_EGLD: u64 = 10_000_000_000_000_000_000;
const FIVE_EGLD: u64 = 5_000_000_000_000_000_000;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(CUSTODY_CODE, token_custody::ContractBuilder);
    blockchain.register_contract(LEDGER_CODE, ledger_mock::ContractBuilder);
    blockchain.register_contract(AMM_CODE, amm_mock::ContractBuilder);
    blockchain
}

struct CustodyTestState {
    world: ScenarioWorld,
}

impl CustodyTestState {
    fn new() -> Self {
        Self::new_with(2, vec![ALICE.to_address(), BOB.to_address(), CAROL.to_address()])
    }

    fn new_with(quorum: usize, signers: Vec<Address>) -> Self {
        let mut world = world();

        world.account(OWNER).nonce(1);
        world
            .account(ALICE)
            .nonce(1)
            .balance(BigUint::<StaticApi>::from(INITIAL_EGLD as u128));
        world
            .account(BOB)
            .nonce(1)
            .balance(BigUint::<StaticApi>::from(INITIAL_EGLD as u128));
        world
            .account(CAROL)
            .nonce(1)
            .balance(BigUint::<StaticApi>::from(INITIAL_EGLD as u128));
        world.account(DAVE).nonce(1);

        world
            .tx()
            .from(OWNER)
            .typed(ledger_mock_proxy::LedgerMockProxy)
            .init()
            .code(LEDGER_CODE)
            .new_address(LEDGER_ADDRESS)
            .run();

        world
            .tx()
            .from(OWNER)
            .typed(amm_mock_proxy::AmmMockProxy)
            .init(PAIR)
            .code(AMM_CODE)
            .new_address(AMM_ADDRESS)
            .run();

        world
            .tx()
            .from(OWNER)
            .typed(custody_proxy::TokenCustodyProxy)
            .init(
                LEDGER_ADDRESS,
                AMM_ADDRESS,
                WRAPPED_NATIVE,
                TREASURY,
                PRESALE,
                quorum,
                MultiValueVec::from(signers),
            )
            .code(CUSTODY_CODE)
            .new_address(CUSTODY_ADDRESS)
            .run();

        Self { world }
    }

    fn propose_change_quorum(&mut self, from: TestAddress, new_quorum: usize) -> u64 {
        self.world
            .tx()
            .from(from)
            .to(CUSTODY_ADDRESS)
            .typed(custody_proxy::TokenCustodyProxy)
            .propose_change_quorum(new_quorum)
            .returns(ReturnsResult)
            .run()
    }

    fn propose_add_signer(&mut self, from: TestAddress, signer: TestAddress, new_quorum: usize) -> u64 {
        self.world
            .tx()
            .from(from)
            .to(CUSTODY_ADDRESS)
            .typed(custody_proxy::TokenCustodyProxy)
            .propose_add_signer(signer, new_quorum)
            .returns(ReturnsResult)
            .run()
    }

    fn propose_remove_signer(&mut self, from: TestAddress, signer: TestAddress) -> u64 {
        self.world
            .tx()
            .from(from)
            .to(CUSTODY_ADDRESS)
            .typed(custody_proxy::TokenCustodyProxy)
            .propose_remove_signer(signer)
            .returns(ReturnsResult)
            .run()
    }

    fn approve(&mut self, from: TestAddress, proposal_id: u64) {
        self.world
            .tx()
            .from(from)
            .to(CUSTODY_ADDRESS)
            .typed(custody_proxy::TokenCustodyProxy)
            .approve(proposal_id)
            .run();
    }

    fn approve_expect_err(&mut self, from: TestAddress, proposal_id: u64, message: &str) {
        self.world
            .tx()
            .from(from)
            .to(CUSTODY_ADDRESS)
            .typed(custody_proxy::TokenCustodyProxy)
            .approve(proposal_id)
            .returns(ExpectError(4, message))
            .run();
    }

    fn execute_expect_err(&mut self, from: TestAddress, proposal_id: u64, message: &str) {
        self.world
            .tx()
            .from(from)
            .to(CUSTODY_ADDRESS)
            .typed(custody_proxy::TokenCustodyProxy)
            .execute(proposal_id)
            .returns(ExpectError(4, message))
            .run();
    }

    fn cancel(&mut self, from: TestAddress, proposal_id: u64) {
        self.world
            .tx()
            .from(from)
            .to(CUSTODY_ADDRESS)
            .typed(custody_proxy::TokenCustodyProxy)
            .cancel(proposal_id)
            .run();
    }

    fn get_proposal(&mut self, proposal_id: u64) -> Proposal<StaticApi> {
        self.world
            .query()
            .to(CUSTODY_ADDRESS)
            .typed(custody_proxy::TokenCustodyProxy)
            .get_proposal(proposal_id)
            .returns(ReturnsResult)
            .run()
    }

    fn get_quorum(&mut self) -> usize {
        self.world
            .query()
            .to(CUSTODY_ADDRESS)
            .typed(custody_proxy::TokenCustodyProxy)
            .get_quorum()
            .returns(ReturnsResult)
            .run()
    }

    fn is_signer(&mut self, address: TestAddress) -> bool {
        self.world
            .query()
            .to(CUSTODY_ADDRESS)
            .typed(custody_proxy::TokenCustodyProxy)
            .is_signer(address)
            .returns(ReturnsResult)
            .run()
    }
}

#[test]
fn test_propose_requires_signer() {
    let mut state = CustodyTestState::new();

    state
        .world
        .tx()
        .from(DAVE)
        .to(CUSTODY_ADDRESS)
        .typed(custody_proxy::TokenCustodyProxy)
        .propose_change_quorum(1usize)
        .returns(ExpectError(4, "Only signers may propose"))
        .run();
}

#[test]
fn test_approval_reaching_quorum_auto_executes() {
    let mut state = CustodyTestState::new();

    let proposal_id = state.propose_change_quorum(ALICE, 1);
    assert_eq!(proposal_id, 1);

    state.approve(ALICE, proposal_id);
    let proposal = state.get_proposal(proposal_id);
    assert_eq!(proposal.approval_count, 1);
    assert_eq!(proposal.status, ProposalStatus::Pending);
    assert_eq!(state.get_quorum(), 2);

    state.approve(BOB, proposal_id);
    let proposal = state.get_proposal(proposal_id);
    assert_eq!(proposal.approval_count, 2);
    assert_eq!(proposal.status, ProposalStatus::Executed);
    assert_eq!(state.get_quorum(), 1);
}

#[test]
fn test_double_approval_rejected() {
    let mut state = CustodyTestState::new();

    let proposal_id = state.propose_change_quorum(ALICE, 1);
    state.approve(ALICE, proposal_id);
    state.approve_expect_err(ALICE, proposal_id, "Already approved");
}

#[test]
fn test_approve_missing_proposal_rejected() {
    let mut state = CustodyTestState::new();

    state.approve_expect_err(ALICE, 7, "Proposal does not exist");
}

#[test]
fn test_approve_after_execution_rejected() {
    let mut state = CustodyTestState::new();

    let proposal_id = state.propose_change_quorum(ALICE, 2);
    state.approve(ALICE, proposal_id);
    state.approve(BOB, proposal_id);
    state.approve_expect_err(CAROL, proposal_id, "Proposal is not pending");
}

#[test]
fn test_execute_requires_quorum() {
    let mut state = CustodyTestState::new();

    let proposal_id = state.propose_change_quorum(ALICE, 1);
    state.execute_expect_err(CAROL, proposal_id, "Insufficient approvals");

    state.approve(ALICE, proposal_id);
    state.execute_expect_err(CAROL, proposal_id, "Insufficient approvals");
}

#[test]
fn test_execute_succeeds_after_quorum_lowered() {
    let mut state = CustodyTestState::new();

    // One approval, short of the current quorum of 2.
    let add_id = state.propose_add_signer(ALICE, DAVE, 2);
    state.approve(ALICE, add_id);

    let quorum_id = state.propose_change_quorum(BOB, 1);
    state.approve(ALICE, quorum_id);
    state.approve(BOB, quorum_id);
    assert_eq!(state.get_quorum(), 1);

    // The standing approval now satisfies the lowered quorum.
    state
        .world
        .tx()
        .from(ALICE)
        .to(CUSTODY_ADDRESS)
        .typed(custody_proxy::TokenCustodyProxy)
        .execute(add_id)
        .run();

    assert!(state.is_signer(DAVE));
    assert_eq!(state.get_quorum(), 2);
    let proposal = state.get_proposal(add_id);
    assert_eq!(proposal.status, ProposalStatus::Executed);
}

#[test]
fn test_cancel_refunds_attached_value() {
    let mut state = CustodyTestState::new();

    state
        .world
        .tx()
        .from(ALICE)
        .to(CUSTODY_ADDRESS)
        .typed(custody_proxy::TokenCustodyProxy)
        .propose_deploy_distribution()
        .egld(FIVE_EGLD)
        .run();
    state.world.check_account(ALICE).balance(INITIAL_EGLD - FIVE_EGLD);

    state.cancel(BOB, 1);
    state
        .world
        .check_account(BOB)
        .balance(BigUint::<StaticApi>::from((INITIAL_EGLD + FIVE_EGLD) as u128));

    let proposal = state.get_proposal(1);
    assert_eq!(proposal.status, ProposalStatus::Cancelled);

    state.approve_expect_err(CAROL, 1, "Proposal is not pending");
}

#[test]
fn test_cancel_requires_signer_and_pending_state() {
    let mut state = CustodyTestState::new();

    let proposal_id = state.propose_change_quorum(ALICE, 1);

    state
        .world
        .tx()
        .from(DAVE)
        .to(CUSTODY_ADDRESS)
        .typed(custody_proxy::TokenCustodyProxy)
        .cancel(proposal_id)
        .returns(ExpectError(4, "Only signers may cancel"))
        .run();

    state.cancel(ALICE, proposal_id);
    state
        .world
        .tx()
        .from(ALICE)
        .to(CUSTODY_ADDRESS)
        .typed(custody_proxy::TokenCustodyProxy)
        .cancel(proposal_id)
        .returns(ExpectError(4, "Proposal is not pending"))
        .run();
}

#[test]
fn test_add_signer_and_duplicate_rejection() {
    let mut state = CustodyTestState::new();

    let proposal_id = state.propose_add_signer(ALICE, DAVE, 3);
    state.approve(ALICE, proposal_id);
    state.approve(BOB, proposal_id);

    assert!(state.is_signer(DAVE));
    assert_eq!(state.get_quorum(), 3);

    let signers = state
        .world
        .query()
        .to(CUSTODY_ADDRESS)
        .typed(custody_proxy::TokenCustodyProxy)
        .get_signers()
        .returns(ReturnsResult)
        .run();
    assert_eq!(signers.into_iter().count(), 4);

    state
        .world
        .tx()
        .from(ALICE)
        .to(CUSTODY_ADDRESS)
        .typed(custody_proxy::TokenCustodyProxy)
        .propose_add_signer(DAVE, 2usize)
        .returns(ExpectError(4, "Signer already exists"))
        .run();
}

#[test]
fn test_remove_signer_clamps_quorum() {
    let mut state =
        CustodyTestState::new_with(3, vec![ALICE.to_address(), BOB.to_address(), CAROL.to_address()]);

    let proposal_id = state.propose_remove_signer(ALICE, CAROL);
    state.approve(ALICE, proposal_id);
    state.approve(BOB, proposal_id);
    state.approve(CAROL, proposal_id);

    assert!(!state.is_signer(CAROL));
    assert_eq!(state.get_quorum(), 2);
}

#[test]
fn test_remove_last_signer_protected() {
    let mut state = CustodyTestState::new_with(1, vec![ALICE.to_address()]);

    state
        .world
        .tx()
        .from(ALICE)
        .to(CUSTODY_ADDRESS)
        .typed(custody_proxy::TokenCustodyProxy)
        .propose_remove_signer(ALICE)
        .returns(ExpectError(4, "Cannot remove the last signer"))
        .run();
}

#[test]
fn test_remove_unknown_signer_rejected() {
    let mut state = CustodyTestState::new();

    state
        .world
        .tx()
        .from(ALICE)
        .to(CUSTODY_ADDRESS)
        .typed(custody_proxy::TokenCustodyProxy)
        .propose_remove_signer(DAVE)
        .returns(ExpectError(4, "Not a signer"))
        .run();
}

#[test]
fn test_propose_invalid_quorum_bounds() {
    let mut state = CustodyTestState::new();

    state
        .world
        .tx()
        .from(ALICE)
        .to(CUSTODY_ADDRESS)
        .typed(custody_proxy::TokenCustodyProxy)
        .propose_change_quorum(0usize)
        .returns(ExpectError(4, "Invalid quorum"))
        .run();

    state
        .world
        .tx()
        .from(ALICE)
        .to(CUSTODY_ADDRESS)
        .typed(custody_proxy::TokenCustodyProxy)
        .propose_change_quorum(4usize)
        .returns(ExpectError(4, "Invalid quorum"))
        .run();
}

#[test]
fn test_proposal_log_is_append_only() {
    let mut state = CustodyTestState::new();

    let first = state.propose_change_quorum(ALICE, 1);
    let second = state.propose_change_quorum(BOB, 3);
    assert_eq!(first, 1);
    assert_eq!(second, 2);

    state.cancel(ALICE, first);

    // Cancelled proposals keep their slot; new ones append after.
    let third = state.propose_change_quorum(CAROL, 2);
    assert_eq!(third, 3);

    let count: u64 = state
        .world
        .query()
        .to(CUSTODY_ADDRESS)
        .typed(custody_proxy::TokenCustodyProxy)
        .get_proposal_count()
        .returns(ReturnsResult)
        .run();
    assert_eq!(count, 3);

    let pending = state
        .world
        .query()
        .to(CUSTODY_ADDRESS)
        .typed(custody_proxy::TokenCustodyProxy)
        .get_pending_proposals()
        .returns(ReturnsResult)
        .run();
    assert_eq!(pending.into_iter().count(), 2);
}
