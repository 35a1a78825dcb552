use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::widget::Widget;

thread_local! {
    static BOUND: RefCell<Vec<Rc<Widget>>> = RefCell::new(Vec::new());
}

pub(crate) fn lookup(element: &Element) -> Option<Rc<Widget>> {
    let target: &JsValue = element.as_ref();
    BOUND.with(|bound| {
        bound
            .borrow()
            .iter()
            .find(|widget| widget.input_value() == target)
            .cloned()
    })
}

pub(crate) fn register(widget: Rc<Widget>) {
    BOUND.with(|bound| {
        bound.borrow_mut().push(widget);
    });
}

pub(crate) fn release(widget: &Rc<Widget>) {
    BOUND.with(|bound| {
        bound.borrow_mut().retain(|entry| !Rc::ptr_eq(entry, widget));
    });
}


/// Widgets whose input has been removed from the document.
pub(crate) fn detached() -> Vec<Rc<Widget>> {
    BOUND.with(|bound| {
        bound
            .borrow()
            .iter()
            .filter(|widget| !widget.input().is_connected())
            .cloned()
            .collect()
    })
}
