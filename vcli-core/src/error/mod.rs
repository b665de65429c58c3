//! Error handling for vcli
//!
//! Every failure an appliance call can produce is one `VcliError` variant:
//!
//! ```text
//! local input      -> Validation, IoError        (no request was sent)
//! transport        -> Transport                  (reported as 500)
//! HTTP status      -> Status { code }            (non-200 responses)
//! decoding         -> Decode { code }            (body did not match)
//! result envelope  -> Operation { status_id }    (HTTP 200, StatusId != 0)
//! join             -> UnresolvedProgram          (room without a program)
//! ```
//!
//! Nothing retries. The UI renders every variant the same way: as an error
//! box on the screen that issued the request.

pub mod constructors;
pub mod conversions;
pub mod types;


pub use types::{VcliError, VcliResult};
