use complaint_core_api::{ComplaintError, ComplaintResult};
use heapless::String as HeaplessString;

/// Copies `value` into a bounded string, rejecting values longer than
/// `max_chars` characters. `N` is the byte capacity and must hold `max_chars`
/// characters of any width.
pub fn to_heapless<const N: usize>(
    value: &str,
    field: &str,
    max_chars: usize,
) -> ComplaintResult<HeaplessString<N>> {
    let too_long = || ComplaintError::InvalidInput(format!("Value for '{field}' is too long (max {max_chars} chars)"));

    if value.chars().count() > max_chars {
        return Err(too_long());
    }
    let mut bounded = HeaplessString::new();
    bounded.push_str(value).map_err(|_| too_long())?;
    Ok(bounded)
}
