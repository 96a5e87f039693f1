#![no_std]

multiversx_sc::imports!();

pub mod ledger_mock_proxy;

/// Minimal fungible-asset ledger standing in for the production
/// token contract in scenario tests. Tracks balances, allowances
/// and the two configuration flags the custody contract sets.
#[multiversx_sc::contract]
pub trait LedgerMock {
    #[init]
    fn init(&self) {}

    #[endpoint(mint)]
    fn mint(&self, to: ManagedAddress, amount: BigUint) {
        self.balances(&to).update(|balance| *balance += &amount);
        self.minted_supply().update(|supply| *supply += &amount);
    }

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) -> bool {
        let caller = self.blockchain().get_caller();
        let balance = self.balances(&caller).get();
        if balance < amount {
            return false;
        }
        self.balances(&caller).set(balance - &amount);
        self.balances(&to).update(|recipient| *recipient += &amount);
        true
    }

    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.allowance(&caller, &spender).set(&amount);
    }

    #[endpoint(setFeeExemption)]
    fn set_fee_exemption(&self, address: ManagedAddress, exempt: bool) {
        self.fee_exempt(&address).set(exempt);
    }

    #[endpoint(setPoolAddress)]
    fn set_pool_address(&self, address: ManagedAddress, is_pool: bool) {
        self.pool_flag(&address).set(is_pool);
    }

    #[view(balanceOf)]
    fn balance_of(&self, address: ManagedAddress) -> BigUint {
        self.balances(&address).get()
    }

    #[view(getMintedSupply)]
    fn get_minted_supply(&self) -> BigUint {
        self.minted_supply().get()
    }

    #[view(getAllowance)]
    fn get_allowance(&self, owner: ManagedAddress, spender: ManagedAddress) -> BigUint {
        self.allowance(&owner, &spender).get()
    }

    #[view(isFeeExempt)]
    fn is_fee_exempt(&self, address: ManagedAddress) -> bool {
        self.fee_exempt(&address).get()
    }

    #[view(isPoolAddress)]
    fn is_pool_address(&self, address: ManagedAddress) -> bool {
        self.pool_flag(&address).get()
    }

    #[storage_mapper("balances")]
    fn balances(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("mintedSupply")]
    fn minted_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("allowance")]
    fn allowance(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("feeExempt")]
    fn fee_exempt(&self, address: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("poolFlag")]
    fn pool_flag(&self, address: &ManagedAddress) -> SingleValueMapper<bool>;
}
