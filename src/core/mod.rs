// Domain-layer modules: the pure document pipeline
pub mod cleaners {
    pub use crate::cleaners::*;
}

pub mod detector {
    pub use crate::detector::*;
}

pub mod validators {
    pub use crate::validators::*;
}

pub mod document {
    pub use crate::document::*;
}

pub mod models {
    pub use crate::models::*;
}
