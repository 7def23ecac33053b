pub mod backfill;
pub mod coordinator;
pub mod dispatch;
pub mod doors;
pub mod fsm;
