use multiversx_sc::proxy_imports::*;

pub struct AmmMockProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for AmmMockProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = AmmMockProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        AmmMockProxyMethods { wrapped_tx: tx }
    }
}

pub struct AmmMockProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> AmmMockProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        pair_address: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&pair_address)
            .original_result()
    }
}

impl<Env, From, To, Gas> AmmMockProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn factory(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("factory")
            .original_result()
    }

    pub fn create_pair<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        token_a: Arg0,
        token_b: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createPair")
            .argument(&token_a)
            .argument(&token_b)
            .original_result()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_liquidity_native<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
        Arg3: ProxyArg<BigUint<Env::Api>>,
        Arg4: ProxyArg<ManagedAddress<Env::Api>>,
        Arg5: ProxyArg<u64>,
    >(
        self,
        token: Arg0,
        amount: Arg1,
        min_token: Arg2,
        min_native: Arg3,
        to: Arg4,
        deadline: Arg5,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        (),
        Gas,
        MultiValue3<BigUint<Env::Api>, BigUint<Env::Api>, BigUint<Env::Api>>,
    > {
        self.wrapped_tx
            .raw_call("addLiquidityNative")
            .argument(&token)
            .argument(&amount)
            .argument(&min_token)
            .argument(&min_native)
            .argument(&to)
            .argument(&deadline)
            .original_result()
    }

    pub fn was_pair_created(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("wasPairCreated")
            .original_result()
    }

    pub fn get_pair_token_a(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPairTokenA")
            .original_result()
    }

    pub fn get_pair_token_b(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPairTokenB")
            .original_result()
    }

    pub fn get_last_token_amount(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLastTokenAmount")
            .original_result()
    }

    pub fn get_last_native_amount(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLastNativeAmount")
            .original_result()
    }

    pub fn get_last_recipient(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLastRecipient")
            .original_result()
    }
}
