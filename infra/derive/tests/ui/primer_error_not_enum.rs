use primer_derive::primer_error;

#[primer_error]
pub struct LessonError {
    message: String,
}

fn main() {}
