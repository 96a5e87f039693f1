use multiversx_sc::proxy_imports::*;

use crate::types::{BeneficiaryRecord, Proposal, VestingSchedule};

pub struct TokenCustodyProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for TokenCustodyProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = TokenCustodyProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        TokenCustodyProxyMethods { wrapped_tx: tx }
    }
}

pub struct TokenCustodyProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> TokenCustodyProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    #[allow(clippy::too_many_arguments)]
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<ManagedAddress<Env::Api>>,
        Arg4: ProxyArg<ManagedAddress<Env::Api>>,
        Arg5: ProxyArg<usize>,
        Arg6: ProxyArg<MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        ledger_address: Arg0,
        amm_address: Arg1,
        wrapped_native_address: Arg2,
        treasury_address: Arg3,
        presale_address: Arg4,
        quorum: Arg5,
        signers: Arg6,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&ledger_address)
            .argument(&amm_address)
            .argument(&wrapped_native_address)
            .argument(&treasury_address)
            .argument(&presale_address)
            .argument(&quorum)
            .argument(&signers)
            .original_result()
    }
}

impl<Env, From, To, Gas> TokenCustodyProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }

    pub fn propose_deploy_distribution(
        self,
    ) -> TxTypedCall<Env, From, To, (), Gas, u64> {
        self.wrapped_tx
            .raw_call("proposeDeployDistribution")
            .original_result()
    }

    pub fn propose_seed_liquidity(self) -> TxTypedCall<Env, From, To, (), Gas, u64> {
        self.wrapped_tx
            .raw_call("proposeSeedLiquidity")
            .original_result()
    }

    pub fn propose_register_beneficiary<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        category: Arg0,
        beneficiary: Arg1,
        share: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("proposeRegisterBeneficiary")
            .argument(&category)
            .argument(&beneficiary)
            .argument(&share)
            .original_result()
    }

    pub fn propose_add_signer<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<usize>,
    >(
        self,
        signer: Arg0,
        new_quorum: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("proposeAddSigner")
            .argument(&signer)
            .argument(&new_quorum)
            .original_result()
    }

    pub fn propose_remove_signer<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        signer: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("proposeRemoveSigner")
            .argument(&signer)
            .original_result()
    }

    pub fn propose_change_quorum<Arg0: ProxyArg<usize>>(
        self,
        new_quorum: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("proposeChangeQuorum")
            .argument(&new_quorum)
            .original_result()
    }

    pub fn approve<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("approve")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn execute<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("execute")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn cancel<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("cancel")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn claim(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("claim")
            .original_result()
    }

    pub fn get_proposal<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Proposal<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposal")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_proposal_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalCount")
            .original_result()
    }

    pub fn get_pending_proposals(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Proposal<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPendingProposals")
            .original_result()
    }

    pub fn has_approved<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        proposal_id: Arg0,
        signer: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasApproved")
            .argument(&proposal_id)
            .argument(&signer)
            .original_result()
    }

    pub fn get_signers(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSigners")
            .original_result()
    }

    pub fn get_quorum(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getQuorum")
            .original_result()
    }

    pub fn is_signer<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isSigner")
            .argument(&address)
            .original_result()
    }

    pub fn get_claimable<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getClaimable")
            .argument(&address)
            .original_result()
    }

    pub fn get_vesting_schedule<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        label: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, VestingSchedule> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVestingSchedule")
            .argument(&label)
            .original_result()
    }

    pub fn get_beneficiary<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BeneficiaryRecord<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBeneficiary")
            .argument(&address)
            .original_result()
    }

    pub fn is_deployed(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isDeployed")
            .original_result()
    }

    pub fn is_liquidity_seeded(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isLiquiditySeeded")
            .original_result()
    }

    pub fn get_pair_address(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPairAddress")
            .original_result()
    }

    pub fn get_total_supply(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalSupply")
            .original_result()
    }

    #[allow(clippy::type_complexity)]
    pub fn get_distribution_config(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue5<
            ManagedAddress<Env::Api>,
            ManagedAddress<Env::Api>,
            ManagedAddress<Env::Api>,
            ManagedAddress<Env::Api>,
            ManagedAddress<Env::Api>,
        >,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDistributionConfig")
            .original_result()
    }
}
