//! Fill a small list past capacity and show both push flavours.
//!
//! Run with `RUST_LOG=debug` to see the dropped-push log records.

use idxlist::{FixedList, ListError};

fn main() -> Result<(), ListError> {
    env_logger::init();

    let mut list: FixedList<&str, 3> = FixedList::new("");
    for name in ["alpha", "beta", "gamma", "delta"] {
        list.push_front(name);
    }
    log::info!("after four pushes: {list:?} ({} of {})", list.len(), list.capacity());

    if let Err(err) = list.try_push_front("epsilon") {
        log::warn!("{err}");
        let rejected = err.into_inner();
        log::warn!("kept {rejected:?} for later");
    }

    list.remove(&"beta");
    log::info!("front is {}", list.front()?);

    list.clear();
    match list.front() {
        Ok(v) => log::info!("unexpected front {v}"),
        Err(err) => log::info!("empty list: {err}"),
    }
    Ok(())
}
