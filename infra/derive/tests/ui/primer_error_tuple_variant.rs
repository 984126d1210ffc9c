use primer_derive::primer_error;

#[primer_error]
pub enum LessonError {
    Io(std::io::Error),
}

fn main() {}
