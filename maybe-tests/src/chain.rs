//! Properties of `Maybe` construction and chaining over every pointer-like shape.
#[cfg(test)]
use crate::fixtures::{arb_point, arb_source, Opt, Point};
#[cfg(test)]
use maybe::{Absence, IntoMaybe, Maybe, Nullable, PartiallyApplied, RawPointer, Shape};
#[cfg(test)]
use proptest::proptest;
#[cfg(test)]
use std::cell::Cell;
#[cfg(test)]
use std::ptr::NonNull;
#[cfg(test)]
use std::rc::Rc;

#[cfg(test)]
proptest! {
    #[test]
    fn presence_follows_the_wrapped_value(source in arb_source()) {
        source.with_maybe(|m| {
            assert_eq!(m.is_present(), source.expected().is_some());
            assert_eq!(m.get().copied(), source.expected());
            assert_eq!(m.shape(), source.shape());
        });
    }

    #[test]
    fn and_then_applies_only_when_present(source in arb_source()) {
        let calls = Cell::new(0);
        source.with_maybe(|m| {
            let doubled = m.and_then(|x| {
                calls.set(calls.get() + 1);
                x.wrapping_mul(2)
            });
            assert_eq!(doubled.get().copied(), source.expected().map(|x| x.wrapping_mul(2)));
            assert_eq!(doubled.shape(), Shape::Optional);
        });
        assert_eq!(calls.get(), usize::from(source.expected().is_some()));
    }

    #[test]
    fn identity_round_trip(source in arb_source()) {
        source.with_maybe(|m| {
            let same = m.and_then(|x| *x);
            assert_eq!(same, m);
            if let Some(expected) = source.expected() {
                assert_eq!(same.unwrap(), &expected);
            }
        });
    }

    #[test]
    fn pointer_results_keep_their_native_null(source in arb_source()) {
        let mut target = 0i64;
        let addr: *mut i64 = &mut target;
        source.with_maybe(|m| {
            // SAFETY: `target` outlives `chained` and is only read through it
            let chained = m.and_then(|_| unsafe { RawPointer::new(addr) });
            assert_eq!(chained.shape(), Shape::Raw);
            if m.is_present() {
                assert_eq!(chained.as_ptr(), NonNull::new(addr));
            } else {
                assert!(chained.as_ptr().is_none());
            }
        });
    }

    #[test]
    fn smart_pointer_results_stay_smart(source in arb_source()) {
        source.with_maybe(|m| {
            let boxed = m.and_then(|x| Box::new(x.to_string()));
            assert_eq!(boxed.shape(), Shape::Smart);
            assert_eq!(boxed.get().cloned(), source.expected().map(|x| x.to_string()));
        });
    }

    #[test]
    fn optional_results_are_not_nested(source in arb_source()) {
        source.with_maybe(|m| {
            let even = m.and_then(|x| (x % 2 == 0).then_some(*x));
            assert_eq!(even.shape(), Shape::Optional);
            assert_eq!(even.get().copied(), source.expected().filter(|x| x % 2 == 0));
        });
    }

    #[test]
    fn fallback_containers_are_interchangeable(source in arb_source()) {
        source.with_maybe(|m| {
            let std_lifted = m.and_then(|x| x.wrapping_add(1));
            let opt_lifted = m.and_then_in::<Opt<PartiallyApplied>, _, _>(|x| x.wrapping_add(1));
            assert_eq!(std_lifted, opt_lifted);
        });
    }

    #[test]
    fn member_access_matches_direct_deref(point in arb_point()) {
        let boxed = Box::new(point);
        let addr = NonNull::from(&*boxed);
        let m = Maybe::new(boxed);

        assert_eq!(m.as_ptr(), Some(addr));
        assert!(std::ptr::eq(&*m, addr.as_ptr()));
        assert_eq!((m.x, m.y), (point.x, point.y));

        let mut slot = point;
        let raw_addr: *mut Point = &mut slot;
        // SAFETY: `slot` outlives `raw` and is only accessed through it
        let raw = unsafe { Maybe::from_raw(raw_addr) };
        assert_eq!(raw.as_ptr(), NonNull::new(raw_addr));
        assert_eq!(raw.y, point.y);
    }
}

#[test]
fn absence_strategy_is_fixed_by_result_type() {
    assert_eq!(<RawPointer<Point> as IntoMaybe>::ABSENCE, Absence::NativeNull);
    assert_eq!(<Box<Point> as IntoMaybe>::ABSENCE, Absence::NativeNull);
    assert_eq!(<Option<Point> as IntoMaybe>::ABSENCE, Absence::NoValue);
    assert_eq!(<Point as IntoMaybe>::ABSENCE, Absence::Lifted);
    assert_eq!(<u8 as IntoMaybe>::ABSENCE, Absence::Lifted);
}

#[test]
fn plain_struct_results_are_lifted() {
    let absent: Maybe<i32> = Maybe::none();
    let point = absent.and_then(|x| Point { x: *x, y: 0 });
    assert_eq!(point.shape(), Shape::Optional);
    assert!(point.is_absent());

    let present = Maybe::some(4i32);
    let point = present.and_then(|x| Point { x: *x, y: -x });
    assert_eq!(point, Some(&Point { x: 4, y: -4 }));
}

#[test]
fn unsized_pointees_chain_like_sized_ones() {
    let text: Maybe<str> = Maybe::new(Box::<str>::from("pointer"));
    let len = text.and_then(str::len);
    assert_eq!(len, Some(&7));

    let tail = text.and_then(|s| &s[3..]);
    assert_eq!(tail.get(), Some("nter"));

    let triple: Rc<dyn Fn(i32) -> i32> = Rc::new(|x: i32| x * 3);
    let scale: Maybe<dyn Fn(i32) -> i32> = Maybe::new(triple);
    assert_eq!(scale.and_then(|f| f(5)), Some(&15));

    let absent: Maybe<[u8]> = Maybe::new(Nullable::<Box<[u8]>>::null());
    assert!(absent.and_then(<[u8]>::len).is_absent());
}
