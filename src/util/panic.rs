/// Runs a block that must panic. With a second argument, the panic message must also contain it.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            std::panic::catch_unwind(|| $run).is_err(),
            "block returned instead of panicking"
        );
    };
    ($run:block, $needle:expr) => {
        match std::panic::catch_unwind(|| $run) {
            Ok(_) => panic!("block returned instead of panicking"),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<String>()
                    .map(String::as_str)
                    .or_else(|| payload.downcast_ref::<&str>().copied())
                    .unwrap_or_default();
                assert!(
                    message.contains($needle),
                    "panic message {message:?} should contain {:?}",
                    $needle
                );
            },
        }
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
