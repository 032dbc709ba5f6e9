//! JUnit-style report model and serialization.

mod collection;
mod recorder;
mod testcase;
mod xml;

pub use collection::{ReportCollection, Suite};
pub use recorder::{SYNTAX_ERROR_TYPE, SuiteRecorder};
pub use testcase::{TestCase, TestStatus, UNSPECIFIED_ERROR_TYPE};
pub use xml::escape;
