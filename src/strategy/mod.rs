pub mod cross;
pub mod ema;
pub mod reconciler;

pub use cross::check_cross;
pub use ema::{ema_series, ema_step};
pub use reconciler::{
    coarse_reading, fine_reading, hybrid_reading, reconcile, CoarseReading, EmaPair, FineReading,
    HybridReading, Reconciliation, ReportRow,
};
