use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Deploys the wasm passed as raw call input, then calls `migrate` on it.
    #[handle_result]
    pub fn update_contract(&self) -> Result<Promise, RegistryError> {
        check_one_yocto()?;
        self.check_admin(&env::predecessor_account_id())?;
        let code = env::input()
            .filter(|code| !code.is_empty())
            .ok_or_else(|| RegistryError::InvalidInput("Missing contract code".into()))?;
        Ok(Promise::new(env::current_account_id())
            .deploy_contract(code)
            .function_call(
                "migrate".to_string(),
                vec![],
                NearToken::from_near(0),
                Gas::from_tgas(GAS_MIGRATE_TGAS),
            )
            .as_return())
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        let mut contract: Self = env::state_read().expect("State read failed");
        let old_version = contract.version.clone();
        contract.version = env!("CARGO_PKG_VERSION").to_string();

        events::emit_contract_upgraded(&env::current_account_id(), &old_version, &contract.version);

        contract
    }
}
