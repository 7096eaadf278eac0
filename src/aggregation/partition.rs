// Fixed-size batching of parameter keys (remote request size limit)

use crate::models::ParameterKey;

/// Max parameter keys per trend request.
pub const TREND_BATCH_SIZE: usize = 25;

/// Order-preserving fixed-size batches; batch i holds keys
/// [i*batch_size, (i+1)*batch_size). Empty input yields no batches.
/// `batch_size` must be non-zero.
pub fn partition_keys(keys: &[ParameterKey], batch_size: usize) -> Vec<Vec<ParameterKey>> {
    keys.chunks(batch_size).map(|c| c.to_vec()).collect()
}
