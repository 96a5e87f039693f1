#![no_std]

multiversx_sc::imports!();

pub mod amm_mock_proxy;

/// Stand-in for the AMM router/factory pair in scenario tests.
/// Acts as its own factory, hands out a pre-configured pair
/// address and records the last add-liquidity call for assertions.
#[multiversx_sc::contract]
pub trait AmmMock {
    #[init]
    fn init(&self, pair_address: ManagedAddress) {
        self.pair_address().set(&pair_address);
    }

    #[view(factory)]
    fn factory(&self) -> ManagedAddress {
        self.blockchain().get_sc_address()
    }

    #[endpoint(createPair)]
    fn create_pair(&self, token_a: ManagedAddress, token_b: ManagedAddress) -> ManagedAddress {
        self.pair_token_a().set(&token_a);
        self.pair_token_b().set(&token_b);
        self.pair_created().set(true);
        self.pair_address().get()
    }

    #[endpoint(addLiquidityNative)]
    #[payable("EGLD")]
    fn add_liquidity_native(
        &self,
        token: ManagedAddress,
        amount: BigUint,
        _min_token: BigUint,
        _min_native: BigUint,
        to: ManagedAddress,
        _deadline: u64,
    ) -> MultiValue3<BigUint, BigUint, BigUint> {
        let native_amount = self.call_value().egld_value().clone_value();
        self.last_liquidity_token().set(&token);
        self.last_token_amount().set(&amount);
        self.last_native_amount().set(&native_amount);
        self.last_recipient().set(&to);

        let shares = &amount + &native_amount;
        (amount, native_amount, shares).into()
    }

    #[view(wasPairCreated)]
    fn was_pair_created(&self) -> bool {
        self.pair_created().get()
    }

    #[view(getPairTokenA)]
    fn get_pair_token_a(&self) -> ManagedAddress {
        self.pair_token_a().get()
    }

    #[view(getPairTokenB)]
    fn get_pair_token_b(&self) -> ManagedAddress {
        self.pair_token_b().get()
    }

    #[view(getLastTokenAmount)]
    fn get_last_token_amount(&self) -> BigUint {
        self.last_token_amount().get()
    }

    #[view(getLastNativeAmount)]
    fn get_last_native_amount(&self) -> BigUint {
        self.last_native_amount().get()
    }

    #[view(getLastRecipient)]
    fn get_last_recipient(&self) -> ManagedAddress {
        self.last_recipient().get()
    }

    #[storage_mapper("pairAddress")]
    fn pair_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("pairCreated")]
    fn pair_created(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("pairTokenA")]
    fn pair_token_a(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("pairTokenB")]
    fn pair_token_b(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("lastLiquidityToken")]
    fn last_liquidity_token(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("lastTokenAmount")]
    fn last_token_amount(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("lastNativeAmount")]
    fn last_native_amount(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("lastRecipient")]
    fn last_recipient(&self) -> SingleValueMapper<ManagedAddress>;
}
