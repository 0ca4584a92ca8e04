
// --- Unit Tests ---
pub mod unit {
    pub mod admin_test;
    pub mod challenge_test;
    pub mod config_test;
    pub mod guards_test;
    pub mod period_test;
    pub mod registry_test;
    pub mod rewards_test;
    pub mod uploader_test;

    // --- View & event coverage ---
    pub mod events_test;
    pub mod views_test;
}
