//! Helpers for exercising signal-backed collaborators inside a live
//! `VirtualDom`.

use dioxus::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

type Slot<T> = Rc<Cell<Option<Signal<T>>>>;

fn host<T: 'static>((init, slot): (fn() -> T, Slot<T>)) -> Element {
    let signal = use_signal(init);
    slot.set(Some(signal));
    rsx! {}
}

/// Builds a `VirtualDom` whose root owns a `Signal` created from `init`.
///
/// The signal stays alive as long as the returned dom. Reads and writes must
/// happen inside `dom.in_runtime`.
pub fn hosted_signal<T: 'static>(init: fn() -> T) -> (VirtualDom, Signal<T>) {
    let slot: Slot<T> = Rc::new(Cell::new(None));
    let mut dom = VirtualDom::new_with_props(host::<T>, (init, slot.clone()));
    dom.rebuild_in_place();
    let signal = slot.get().expect("root component runs on first rebuild");
    (dom, signal)
}

type PairSlot<A, B> = Rc<Cell<Option<(Signal<A>, Signal<B>)>>>;

fn host_pair<A: 'static, B: 'static>(
    (init_a, init_b, slot): (fn() -> A, fn() -> B, PairSlot<A, B>),
) -> Element {
    let a = use_signal(init_a);
    let b = use_signal(init_b);
    slot.set(Some((a, b)));
    rsx! {}
}

/// Like [`hosted_signal`], with two signals owned by the same root.
pub fn hosted_signals<A: 'static, B: 'static>(
    init_a: fn() -> A,
    init_b: fn() -> B,
) -> (VirtualDom, Signal<A>, Signal<B>) {
    let slot: PairSlot<A, B> = Rc::new(Cell::new(None));
    let mut dom = VirtualDom::new_with_props(host_pair::<A, B>, (init_a, init_b, slot.clone()));
    dom.rebuild_in_place();
    let (a, b) = slot.get().expect("root component runs on first rebuild");
    (dom, a, b)
}
