use droidkit_derive::droidkit_error;
use std::borrow::Cow;

#[droidkit_error]
pub enum SampleError {
    #[error("I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn failing_io() -> Result<(), std::io::Error> {
    Err(std::io::Error::other("disk gone"))
}

#[test]
fn ui_expansion_compiles() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/droidkit_error_pass.rs");
}

#[test]
fn context_is_attached_to_source_errors() {
    let err = failing_io().context("writing cache").unwrap_err();
    assert!(matches!(err, SampleError::Io { .. }));
    assert_eq!(err.to_string(), "I/O failure (writing cache): disk gone");
}

#[test]
fn question_mark_converts_without_context() {
    fn run() -> Result<(), SampleError> {
        failing_io()?;
        Ok(())
    }

    let err = run().unwrap_err();
    assert_eq!(err.to_string(), "I/O failure: disk gone");
}

#[test]
fn context_can_be_added_to_own_errors() {
    let res: Result<(), SampleError> =
        Err(SampleError::Rejected { message: "bad key".into(), context: None });
    let err = res.context("bundle").unwrap_err();
    assert_eq!(err.to_string(), "Rejected (bundle): bad key");
}

#[test]
fn strings_become_internal_errors() {
    let err: SampleError = "borrowed".into();
    assert!(matches!(err, SampleError::Internal { .. }));

    let err: SampleError = String::from("owned").into();
    assert_eq!(err.to_string(), "Internal error: owned");
}
