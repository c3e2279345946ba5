//! Named component access.
//!
//! Each vector dimension gets a `#[repr(C)]` view struct whose fields line up with the component
//! buffer, and the [`Vector`] types deref to the matching view. That makes `v.x` read a component
//! and `v.x = ...` write it in place — the only mutating operations in the library besides
//! indexed writes.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

macro_rules! component_views {
    ($($name:ident, $dim:literal => { $($component:ident),+ };)+) => {
        $(
            /// Named component view, the deref target of the vector type of the matching
            /// dimension.
            #[repr(C)]
            pub struct $name {
                $(pub $component: f32,)+
                _priv: (), // prevent external construction
            }

            impl Deref for Vector<$dim> {
                type Target = $name;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // SAFETY: `Vector` is `repr(transparent)` over `[f32; N]` and the view is a
                    // `repr(C)` struct of N `f32` fields (`_priv` is zero-sized), so layouts
                    // match exactly.
                    unsafe { mem::transmute(self) }
                }
            }

            impl DerefMut for Vector<$dim> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    // SAFETY: as above.
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

component_views! {
    XY, 2 => { x, y };
    XYZ, 3 => { x, y, z };
    XYZW, 4 => { x, y, z, w };
}
