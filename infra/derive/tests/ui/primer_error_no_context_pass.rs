use primer_derive::primer_error;

#[primer_error]
pub enum LookupError {
    #[error("Value not found: {value}")]
    ValueNotFound { value: i64 },
}

fn main() {
    let err = LookupError::ValueNotFound { value: 6 };
    assert_eq!(err.kind(), "ValueNotFound");
    assert_eq!(err.to_string(), "Value not found: 6");
}
