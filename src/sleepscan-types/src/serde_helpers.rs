use chrono::TimeDelta;
use serde::Serializer;

pub(crate) fn delta_seconds<S: Serializer>(delta: &TimeDelta, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_i64(delta.num_seconds())
}

pub(crate) fn opt_delta_seconds<S: Serializer>(
    delta: &Option<TimeDelta>,
    s: S,
) -> Result<S::Ok, S::Error> {
    match delta {
        Some(delta) => s.serialize_some(&delta.num_seconds()),
        None => s.serialize_none(),
    }
}
