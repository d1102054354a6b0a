use validator::Validate;

pub fn validate<T: Validate>(val: &T) -> Result<(), validator::ValidationErrors> {
    val.validate()
}

/// Validates every item of a batch, stopping at the first failure.
pub fn validate_all<T: Validate>(items: &[T]) -> Result<(), validator::ValidationErrors> {
    items.iter().try_for_each(validate)
}
