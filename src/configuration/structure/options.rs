use crate::configuration::errors::ConfigurationError;
use crate::configuration::raw::RawTable;
use crate::configuration::schema::SchemaCatalog;
use crate::configuration::traits::ResolvableSection;
use crate::configuration::utilities::lookup_boolean;


/***
 * Retired fields, pending removal.
 *
 * The mapper/reducer interfaces still carry these, so they are published
 * with fixed values instead of being read from the file.
 */

/// When true, the FFT ran at the mapper stage instead of the reducer stage.
const FFT_AT_MAPPER: bool = false;

/// Per-station task scaling in the reducers.
const TASK_SCALING_STATIONS: bool = false;

/// One-baseline-per-task scaling in the reducers.
const ONE_BASELINE_PER_TASK: bool = false;

/// Internal logging in the mapper stage.
const INTERNAL_LOG_MAPPER: i32 = 0;

/// Internal logging in the reducer stage.
const INTERNAL_LOG_REDUCER: i32 = 0;

/// Number of DFT windows per mapper output; -1 keeps the whole frame.
const FFTS_PER_CHUNK: i32 = -1;

/// Lower chunk constraint for the mapper.
const MIN_MAPPER_CHUNK: i32 = -1;

/// Upper chunk constraint for the mapper.
const MAX_MAPPER_CHUNK: i32 = -1;


/// Miscellaneous processing options, including the retired toggles and
/// sentinels the mapper/reducer stages still expect.
#[derive(Clone, PartialEq, Debug)]
pub struct OptionsConfiguration {
    /// Always false; retained pending removal.
    pub fft_at_mapper: bool,

    /// Always false; retained pending removal.
    pub task_scaling_stations: bool,

    /// Always false; retained pending removal.
    pub one_baseline_per_task: bool,

    /// Whether the correlation runs in single precision.
    pub single_precision: bool,

    /// Always 0; retained pending removal.
    pub internal_log_mapper: i32,

    /// Always 0; retained pending removal.
    pub internal_log_reducer: i32,

    /// Always -1; retained pending removal.
    pub ffts_per_chunk: i32,

    /// Always -1; retained pending removal.
    pub min_mapper_chunk: i32,

    /// Always -1; retained pending removal.
    pub max_mapper_chunk: i32,
}

impl ResolvableSection for OptionsConfiguration {
    fn resolve(table: &RawTable, schema: &SchemaCatalog) -> Result<Self, ConfigurationError> {
        // Only the single-precision toggle is still read from the file; the
        // retired fields keep their fixed values no matter what it says.
        Ok(Self {
            fft_at_mapper: FFT_AT_MAPPER,
            task_scaling_stations: TASK_SCALING_STATIONS,
            one_baseline_per_task: ONE_BASELINE_PER_TASK,
            single_precision: lookup_boolean(table, &schema.single_precision)?,
            internal_log_mapper: INTERNAL_LOG_MAPPER,
            internal_log_reducer: INTERNAL_LOG_REDUCER,
            ffts_per_chunk: FFTS_PER_CHUNK,
            min_mapper_chunk: MIN_MAPPER_CHUNK,
            max_mapper_chunk: MAX_MAPPER_CHUNK,
        })
    }
}
