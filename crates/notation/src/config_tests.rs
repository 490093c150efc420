use super::*;
use std::env;
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn with_env<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let _guard = ENV_LOCK.lock().unwrap();
    let prev: Vec<_> = vars.iter().map(|(k, _)| (*k, env::var(k).ok())).collect();
    for (k, v) in vars {
        env::set_var(k, v);
    }
    let result = f();
    for (k, v) in prev {
        match v {
            Some(v) => env::set_var(k, v),
            None => env::remove_var(k),
        }
    }
    result
}

#[test]
fn defaults_with_all_zero() {
    with_env(&[("TABWIDTH", "0"), ("LINEWIDTH", "0"), ("LINEWIDTH1", "0")], || {
        let cfg = Config::from_env();
        assert_eq!(cfg.tab, 0);
        assert_eq!(cfg.c0, 0);
        assert_eq!(cfg.c1, 0);
    });
}

#[test]
fn unset_falls_back_to_spec_defaults() {
    with_env(&[("TABWIDTH", ""), ("LINEWIDTH", ""), ("LINEWIDTH1", "")], || {
        env::remove_var("TABWIDTH");
        env::remove_var("LINEWIDTH");
        env::remove_var("LINEWIDTH1");
        env::remove_var("MAPSORT");
        let cfg = Config::from_env();
        assert_eq!(cfg.tab, 8);
        assert_eq!(cfg.c0, 72);
        assert_eq!(cfg.c1, (72 + 8) * 3 / 2 - 8);
        assert!(cfg.sort_maps);
    });
}

#[test]
fn non_numeric_falls_back_silently() {
    with_env(&[("TABWIDTH", "nope")], || {
        let cfg = Config::from_env();
        assert_eq!(cfg.tab, 8);
    });
}

#[test]
fn mapsort_zero_disables_sorting() {
    with_env(&[("MAPSORT", "0")], || {
        let cfg = Config::from_env();
        assert!(!cfg.sort_maps);
    });
}
