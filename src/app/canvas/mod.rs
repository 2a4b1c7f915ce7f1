mod interaction;
mod view;

pub(super) use interaction::GestureZoom;
