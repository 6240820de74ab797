//! Hand expansion of a two-member binding, kept as the design reference for
//! what `labelled!` generates:
//!
//! ```text
//! labelled! {
//!     record: Course,
//!     column: status,
//!     members: {
//!         active: 0 => "LIVE",
//!         inactive: 1 => "NOT_LIVE",
//!     },
//!     alt: name,
//! }
//! ```

use placard::{lookup, Labelled, Member};

struct Course {
    status: CourseStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CourseStatus {
    Active,
    Inactive,
}

impl Labelled for CourseStatus {
    const MEMBERS: &'static [Member] = &[
        Member {
            symbol: "active",
            code: 0,
            label: "LIVE",
        },
        Member {
            symbol: "inactive",
            code: 1,
            label: "NOT_LIVE",
        },
    ];

    fn symbol(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    fn code(&self) -> i64 {
        match self {
            Self::Active => 0,
            Self::Inactive => 1,
        }
    }

    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Active),
            1 => Some(Self::Inactive),
            _ => None,
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

static COURSE_STATUS_LABELS: lookup::LabelMap =
    lookup::LabelMap::new(<CourseStatus as Labelled>::MEMBERS);
static COURSE_STATUS_CODES: lookup::CodeMap =
    lookup::CodeMap::new(<CourseStatus as Labelled>::MEMBERS);

impl Course {
    pub fn status_names() -> &'static lookup::LabelTable {
        COURSE_STATUS_LABELS.table()
    }

    pub fn status_alt_name_to_ids() -> &'static lookup::CodeTable {
        COURSE_STATUS_CODES.table()
    }

    pub fn status_name(&self) -> Option<&'static str> {
        let value = self.status;
        COURSE_STATUS_LABELS.get(Labelled::symbol(&value))
    }

    pub fn active(&self) -> bool {
        matches!(self.status, CourseStatus::Active)
    }

    pub fn inactive(&self) -> bool {
        matches!(self.status, CourseStatus::Inactive)
    }
}

#[test]
fn the_design_expansion_behaves_like_the_macro() {
    let course = Course {
        status: CourseStatus::Active,
    };
    assert_eq!(course.status_name(), Some("LIVE"));
    assert!(course.active());
    assert!(!course.inactive());
    assert_eq!(Course::status_names().get("inactive"), Some(&"NOT_LIVE"));
    assert_eq!(Course::status_alt_name_to_ids().get("LIVE"), Some(&0));
}
