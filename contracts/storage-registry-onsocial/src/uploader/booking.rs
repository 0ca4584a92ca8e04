use crate::*;

#[near]
impl Contract {
    /// Books `amount_units` of network capacity for the caller, paid up
    /// front at `uploader_price_per_unit`. Bookings accumulate. Any deposit
    /// above the price is refunded.
    #[payable]
    #[handle_result]
    pub fn register_as_uploader(&mut self, amount_units: u64) -> Result<(), RegistryError> {
        self.check_not_paused()?;
        let account_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();
        let price = self.internal_book_capacity(&account_id, amount_units, deposit)?;
        refund_excess(&account_id, deposit, price);
        Ok(())
    }
}

impl Contract {
    /// Returns the price charged.
    pub(crate) fn internal_book_capacity(
        &mut self,
        account_id: &AccountId,
        amount_units: u64,
        deposit: u128,
    ) -> Result<u128, RegistryError> {
        if amount_units == 0 {
            return Err(RegistryError::zero_amount());
        }
        let price = (amount_units as u128)
            .checked_mul(self.config.uploader_price_per_unit.0)
            .ok_or_else(|| RegistryError::overflow("Booking price"))?;
        if deposit < price {
            return Err(RegistryError::underfunded_payment(price, deposit));
        }
        let headroom = self
            .total_allocated_capacity
            .saturating_sub(self.total_booked_capacity);
        if amount_units > headroom {
            return Err(RegistryError::insufficient_network_capacity(
                amount_units,
                headroom,
            ));
        }
        let booked = self
            .bookings
            .get(account_id)
            .copied()
            .unwrap_or(0)
            .checked_add(amount_units)
            .ok_or_else(|| RegistryError::overflow("Booked capacity"))?;

        self.bookings.insert(account_id.clone(), booked);
        self.total_booked_capacity += amount_units;

        events::emit_uploader_registered(
            account_id,
            amount_units,
            booked,
            price,
            deposit - price,
        );
        Ok(price)
    }
}

fn refund_excess(account_id: &AccountId, deposit: u128, price: u128) {
    let refund = deposit.saturating_sub(price);
    if refund > 0 {
        let _ = Promise::new(account_id.clone()).transfer(NearToken::from_yoctonear(refund));
    }
}
