use primer_derive::primer_error;

#[primer_error]
pub enum LessonError {
    Io { source: std::io::Error, context: Option<String> },
}

fn main() {}
