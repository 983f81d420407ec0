//! Integration tests for the optional-value containers.
//!
//! Exercises the public API end to end: state transitions, destructive
//! extraction, borrowing, combinators, deferred invocation, equality/hash
//! interop, and drop discipline (no leak, no double-drop) with counting
//! payloads.

use std::cell::Cell;
use std::collections::HashSet;

use solo::{none, some, Opt, OptRef};

/// Movable but deliberately not `Clone`, not `Copy`, not `Default`.
#[derive(Debug, PartialEq, Eq)]
struct Unique(i32);

/// Increments the shared counter on every drop.
struct Counted<'a>(&'a Cell<u32>);

impl Drop for Counted<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

fn return_five() -> i32 {
    5
}

#[test]
fn default_constructor_is_none() {
    let opt: Opt<Unique> = Opt::new();
    assert!(opt.is_none());
    assert!(!opt.is_some());
}

#[test]
fn some_constructor_extracts_once() {
    let mut opt = some(Unique(4));

    assert!(opt.is_some());
    assert_eq!(opt.unwrap(), Ok(Unique(4)));
    assert!(opt.is_none());
}

#[test]
fn replace_on_empty_returns_none() {
    let mut opt: Opt<String> = Opt::new();

    assert!(opt.replace(String::from("hello")).is_none());
    assert!(opt.is_some());
    assert_eq!(opt.unwrap(), Ok(String::from("hello")));
}

#[test]
fn replace_on_full_returns_prior() {
    let mut opt = some(String::from("hello"));

    assert_eq!(opt.replace(String::from("hi")), some(String::from("hello")));
    assert!(opt.is_some());
    assert_eq!(opt.unwrap(), Ok(String::from("hi")));
}

#[test]
fn take_moves_content_and_leaves_none() {
    let mut opt = some(Unique(3));
    let taken = opt.take();

    assert!(opt.is_none());
    assert_eq!(taken, some(Unique(3)));
}

#[test]
fn take_on_empty_leaves_container_unchanged() {
    let mut opt = none::<i32>();
    assert!(opt.take().is_none());
    assert!(opt.is_none());
}

#[test]
fn expect_carries_caller_message() {
    let err = none::<i32>().expect("five is missing").unwrap_err();
    assert_eq!(err.message(), "five is missing");
}

#[test]
fn unwrap_on_none_uses_default_message() {
    let err = none::<i32>().unwrap().unwrap_err();
    assert_eq!(err.message(), "unwrap() called on a `none` value");
}

#[test]
fn expect_none_is_the_dual_check() {
    assert!(some(3).expect_none("bad!").is_err());
    assert!(none::<i32>().expect_none("bad!").is_ok());
}

#[test]
fn unwrap_fallback_family() {
    assert_eq!(none::<i32>().unwrap_or_default(), 0);
    assert_eq!(some(8).unwrap_or_default(), 8);
    assert_eq!(none::<i32>().unwrap_or(3), 3);
    assert_eq!(some(8).unwrap_or(3), 8);
    assert_eq!(none::<i32>().unwrap_or_else(|| 3), 3);
    assert_eq!(some(8).unwrap_or_else(|| 3), 8);
}

#[test]
fn fallback_thunk_only_runs_on_the_empty_path() {
    let calls = Cell::new(0u32);
    let mut opt = some(8);

    let value = opt.unwrap_or_else(|| {
        calls.set(calls.get() + 1);
        3
    });
    assert_eq!(value, 8);
    assert_eq!(calls.get(), 0);

    let value = opt.unwrap_or_else(|| {
        calls.set(calls.get() + 1);
        3
    });
    assert_eq!(value, 3);
    assert_eq!(calls.get(), 1);
}

#[test]
fn by_value_fallback_aliases() {
    assert_eq!(none::<i32>().or_value(3), 3);
    assert_eq!(some(8).or_value(3), 8);
    assert_eq!(none::<i32>().or_else(|| 3), 3);
    assert_eq!(some(8).or_else(|| 3), 8);
}

#[test]
fn fallback_works_for_function_payloads() {
    // No restriction on selector-shaped payloads: the fallback-value and
    // fallback-function paths have distinct names.
    fn zero() -> i32 {
        0
    }

    let chosen = some(return_five as fn() -> i32).or_value(zero);
    assert_eq!(chosen(), 5);
    let chosen = none::<fn() -> i32>().or_value(zero);
    assert_eq!(chosen(), 0);
}

#[test]
fn map_applies_to_present_value() {
    let dbl = some(3).map(|v| v * 2);
    assert_eq!(dbl, some(6));
}

#[test]
fn map_never_runs_on_empty() {
    let calls = Cell::new(0u32);

    let mapped = none::<i32>().map(|v| {
        calls.set(calls.get() + 1);
        v * 2
    });

    assert!(mapped.is_none());
    assert_eq!(calls.get(), 0);
}

#[test]
fn and_then_chains_optional_returns() {
    let sqr = |v: i32| some(v * v);
    let nonify = |_: i32| none::<i32>();

    assert_eq!(none::<i32>().and_then(sqr), none::<i32>());
    assert_eq!(none::<i32>().and_then(nonify), none::<i32>());
    assert_eq!(some(5).and_then(sqr), some(25));
    assert_eq!(some(5).and_then(nonify), none::<i32>());
}

#[test]
fn flatten_collapses_one_level() {
    assert_eq!(none::<Opt<i32>>().flatten(), none::<i32>());
    assert_eq!(some(none::<i32>()).flatten(), none::<i32>());
    assert_eq!(some(some(3)).flatten(), some(3));
}

#[test]
fn chained_maps_compute_stepwise() {
    let chained = some(5)
        .map(|n| n * n)
        .map(|n| n + 1)
        .map(|n| n / 2)
        .map(|n| n - 5);

    assert_eq!(chained, some((5 * 5 + 1) / 2 - 5));
}

#[test]
fn chained_maps_short_circuit_on_empty() {
    let calls = Cell::new(0u32);
    let count = |n: i32| {
        calls.set(calls.get() + 1);
        n
    };

    let chained = none::<i32>()
        .map(count)
        .map(|n| n * n)
        .map(count);

    assert!(chained.is_none());
    assert_eq!(calls.get(), 0);
}

#[test]
fn for_each_reports_whether_it_ran() {
    let mut piped = 0;
    let ran = some(5)
        .map(|n| n * n)
        .map(|n| n + 1)
        .map(|n| n / 2)
        .for_each(|n| piped = n);

    assert!(ran);
    assert_eq!(piped, 13);

    let mut piped = 0;
    let ran = none::<i32>().map(|n| n * n).for_each(|n| piped = n);
    assert!(!ran);
    assert_eq!(piped, 0);
}

#[test]
fn call_invokes_contained_callable() {
    let opt = some(|n: i32| n * 2);
    assert_eq!(opt.call_with(3), some(6));

    let mut opt = some(return_five as fn() -> i32);
    assert_eq!(opt.take().call(), some(5));
    // once taken, the call path coalesces to none
    assert!(opt.take().call().is_none());
}

#[test]
fn function_pointer_payload() {
    let mut opt: Opt<fn() -> i32> = Opt::new();
    assert!(opt.is_none());

    opt.replace(return_five);
    assert_eq!(opt, some(return_five as fn() -> i32));
}

#[test]
fn as_ref_borrows_without_consuming() {
    let opt = some(3);
    let mut view = opt.as_ref();

    assert_eq!(view.unwrap(), Ok(&3));
    assert!(opt.is_some());
}

#[test]
fn as_mut_edits_in_place() {
    let mut opt = some(3);

    {
        let mut view = opt.as_mut();
        assert!(view.is_some());
        *view.unwrap().expect("borrow should be present") = 5;
    }

    assert_eq!(opt, some(5));
}

#[test]
fn borrowing_an_empty_container_yields_empty_views() {
    assert!(none::<i32>().as_ref().is_none());
    assert!(none::<i32>().as_mut().is_none());
}

#[test]
fn borrowed_map_leaves_original_intact() {
    // Works for a payload that cannot be cloned.
    let orig = some(Unique(3));
    let doubled = orig.as_ref().map(|u| Unique(u.0 * 2));

    assert!(orig.is_some());
    assert_eq!(doubled, some(Unique(6)));
}

#[test]
fn exclusive_borrow_leaves_original_intact() {
    // Holds for a payload that cannot be cloned.
    let mut orig = some(Unique(3));

    let touched = orig.as_mut().for_each(|u| u.0 += 1);
    assert!(touched);
    assert_eq!(orig, some(Unique(4)));
}

#[test]
fn copied_and_cloned_lift_borrows() {
    let opt = some(3);
    assert_eq!(opt.as_ref().copied(), some(3));
    assert!(opt.is_some());

    let owned = some(String::from("hi"));
    assert_eq!(owned.as_ref().cloned(), some(String::from("hi")));
    assert!(owned.is_some());

    let mut numbers = some(4);
    assert_eq!(numbers.as_mut().copied(), some(4));
    assert_eq!(numbers, some(4));
}

#[test]
fn shared_views_are_cheaply_clonable() {
    let value = 42;
    let view = OptRef::filled(&value);
    let mut copy = view.clone();

    assert_eq!(copy.unwrap(), Ok(&42));
    assert!(view.is_some());
}

#[test]
fn ref_view_replace_returns_prior_borrow() {
    let first = 1;
    let second = 2;
    let mut view = OptRef::filled(&first);

    let mut prior = view.replace(&second);
    assert_eq!(prior.unwrap(), Ok(&1));
    assert_eq!(view, some(2));
}

#[test]
fn boxed_payload_replaces_cleanly() {
    let mut opt = some(Box::new(3));

    assert_eq!(opt.unwrap().map(|b| *b), Ok(3));
    opt.replace(Box::new(56));
    opt.replace(Box::new(139));
    assert!(opt.is_some());
    assert_eq!(opt.unwrap().map(|b| *b), Ok(139));
}

#[test]
fn equality_is_structural() {
    assert_eq!(some(3), some(3));
    assert_ne!(some(3), none::<i32>());
    assert_ne!(none::<i32>(), some(3));
    assert_eq!(none::<i32>(), none::<i32>());
    assert_ne!(some(3), some(4));
}

#[test]
fn equality_holds_across_variants() {
    let a = some(3);
    let b = some(3);
    let mut c = some(3);

    assert_eq!(a, b.as_ref());
    assert_eq!(b.as_ref(), a);
    assert_eq!(a.as_ref(), c.as_mut());
    assert_ne!(none::<i32>().as_ref(), a);
}

#[test]
fn hash_set_deduplicates_by_presence_and_value() {
    let mut set: HashSet<Opt<String>> = HashSet::new();

    set.insert(none());
    set.insert(none());
    set.insert(some(String::from("hi")));
    set.insert(some(String::from("hello")));

    assert_eq!(set.len(), 3);
    assert!(set.contains(&none::<String>()));
    assert!(set.contains(&some(String::from("hi"))));
    assert!(set.contains(&some(String::from("hello"))));
    assert!(!set.contains(&some(String::from("blabla"))));
}

#[test]
fn renders_as_some_or_none() {
    assert_eq!(format!("{}, {}", some(9), none::<i32>()), "Some(9), None");
    assert_eq!(format!("{:?}", some("hi")), "Some(\"hi\")");
    assert_eq!(format!("{:?}", none::<&str>()), "None");

    let opt = some(9);
    assert_eq!(format!("{}", opt.as_ref()), "Some(9)");
}

#[test]
fn bound_method_debug_is_opaque() {
    let value = some(String::from("abc"));
    let proxy = value.as_ref().bind(String::len);
    assert_eq!(format!("{:?}", proxy), "Some(BoundMethod)");
}

#[test]
fn member_access_through_map_and_bind() {
    struct Probe {
        field: i32,
    }

    impl Probe {
        fn method(&self) -> i32 {
            self.field
        }

        fn scaled(&self, factor: i32) -> i32 {
            self.field * factor
        }
    }

    let value = some(Probe { field: 3 });

    // data member: extraction through map
    assert_eq!(value.as_ref().map(|p| p.field), some(3));

    // method: deferred invocation through bind
    {
        let mut bound = value.as_ref().bind(Probe::method);
        let proxy = bound.unwrap().expect("bound method should be present");
        assert_eq!(proxy.invoke(), 3);
    }

    let with_arg = value.as_ref().bind(Probe::scaled);
    assert_eq!(with_arg.map(|m| m.invoke_with(2)), some(6));

    // owned extraction consumes the container
    assert_eq!(value.map(|p| p.field), some(3));

    // the none path never dereferences anything
    let nothing = none::<Probe>();
    assert!(nothing.as_ref().map(|p| p.field).is_none());
    assert!(nothing.bind(Probe::method).is_none());
}

#[test]
fn bound_method_can_consume_an_owned_instance() {
    struct Envelope(String);

    impl Envelope {
        fn open(self) -> String {
            self.0
        }
    }

    let letter = some(Envelope(String::from("dear reader")));
    let opened = letter.bind(Envelope::open).map(|m| m.invoke());
    assert_eq!(opened, some(String::from("dear reader")));
}

#[test]
fn std_option_interop_is_lossless() {
    assert_eq!(Opt::from(Some(3)), some(3));
    assert_eq!(Opt::from(None::<i32>), none::<i32>());
    assert_eq!(some(3).into_option(), Some(3));
    assert_eq!(none::<i32>().into_option(), None);
    assert_eq!(Opt::from_option(Some(7)).unwrap(), Ok(7));
}

#[test]
fn replace_never_leaks_the_prior_value() {
    let drops = Cell::new(0u32);
    let mut opt = some(Counted(&drops));

    let prior = opt.replace(Counted(&drops));
    assert_eq!(drops.get(), 0);
    drop(prior);
    assert_eq!(drops.get(), 1);
    drop(opt);
    assert_eq!(drops.get(), 2);
}

#[test]
fn dropping_a_full_container_releases_its_value() {
    let drops = Cell::new(0u32);
    {
        let _opt = some(Counted(&drops));
    }
    assert_eq!(drops.get(), 1);
}

#[test]
fn take_transfers_instead_of_dropping() {
    let drops = Cell::new(0u32);
    let mut opt = some(Counted(&drops));

    let taken = opt.take();
    assert_eq!(drops.get(), 0);
    drop(taken);
    assert_eq!(drops.get(), 1);
    drop(opt);
    assert_eq!(drops.get(), 1);
}

#[test]
fn clear_drops_exactly_once() {
    let drops = Cell::new(0u32);
    let mut opt = some(Counted(&drops));

    opt.clear();
    opt.clear();
    assert_eq!(drops.get(), 1);
    assert!(opt.is_none());
}

#[test]
fn clone_duplicates_explicitly() {
    let a = some(String::from("x"));
    let b = a.clone();

    assert_eq!(a, b);
    assert!(a.is_some());
    assert!(b.is_some());

    let empty = none::<String>();
    assert!(empty.clone().is_none());
}

#[test]
fn end_to_end_string_scenario() {
    // none
    let mut opt: Opt<String> = Opt::new();
    assert!(opt.is_none());

    // assign some value
    opt.replace(String::from("hello"));
    assert!(opt.is_some());

    // unwrap takes ownership, leaving none
    assert_eq!(opt.unwrap(), Ok(String::from("hello")));
    assert_eq!(opt.unwrap_or(String::from(" world")), " world");

    // refill and borrow instead of consuming
    opt.replace(String::from("im here"));
    let mut mapped = opt
        .as_ref()
        .map(|name| format!("{name}, too!"))
        .map(|s| s.len());

    assert_eq!(mapped.expect("what?!"), Ok("im here, too!".len()));
    assert!(opt.is_some());

    // back to none
    opt.clear();
    assert!(opt.is_none());
}
