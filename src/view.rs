//! Named component access: `v.x`, `q.w`, `color.r` and so on.
//!
//! Each view is a `#[repr(C)]` struct made of the same elements, in the same order, as the type
//! that derefs to it. The trailing `()` field keeps the views from being constructed outside of
//! this module.

use std::ops::{Deref, DerefMut};

use crate::{Quat, Vector};

macro_rules! views {
    ($($owner:ty => $view:ident { $($field:ident),+ }),+ $(,)?) => {$(
        #[repr(C)]
        pub struct $view<T> {
            $(pub $field: T,)+
            _sealed: (),
        }

        impl<T> Deref for $owner {
            type Target = $view<T>;

            #[inline]
            fn deref(&self) -> &$view<T> {
                // Safety: identical size, alignment and element order; `()` is zero-sized.
                unsafe { &*(self as *const Self).cast::<$view<T>>() }
            }
        }

        impl<T> DerefMut for $owner {
            #[inline]
            fn deref_mut(&mut self) -> &mut $view<T> {
                // Safety: see `deref`.
                unsafe { &mut *(self as *mut Self).cast::<$view<T>>() }
            }
        }
    )+};
}

views! {
    Vector<T, 2> => XY { x, y },
    Vector<T, 3> => XYZ { x, y, z },
    Vector<T, 4> => XYZW { x, y, z, w },
    XYZ<T> => RGB { r, g, b },
    XYZW<T> => RGBA { r, g, b, a },
    Quat<T> => WXYZ { w, x, y, z },
}
