mod complaint;

pub use complaint::{Complaint, NewComplaint, StatusUpdate, DEFAULT_STATUS, MAX_IMAGES};
