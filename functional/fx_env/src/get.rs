//! Positional access into an environment.

/// Access to environment position `N`.
///
/// Implemented for every position of every reference tuple. [`crate::Null`]
/// has no positions.
pub trait Get<const N: usize> {
    /// Type of the argument bound at position `N`.
    type Item;

    fn get(&self) -> &Self::Item;

    fn get_mut(&mut self) -> &mut Self::Item;
}

/// Read environment position `N`.
///
/// Tuples with more than one position implement several `Get<N>`, so plain
/// method syntax needs the position spelled out. This picks it explicitly.
#[inline]
pub fn at<const N: usize, E: Get<N>>(env: &E) -> &E::Item {
    env.get()
}

/// Write access to environment position `N`.
///
/// Writes go straight to the caller's argument.
#[inline]
pub fn at_mut<const N: usize, E: Get<N>>(env: &mut E) -> &mut E::Item {
    env.get_mut()
}

/// Generate `Get<N>` for each listed position of each tuple arity.
///
/// The full type list of an arity is carried as one token tree so it can be
/// repeated once per position.
macro_rules! impl_get {
    (@one [$($T:ident),+] $idx:tt => $Item:ident) => {
        impl<'a, $($T),+> Get<$idx> for ($(&'a mut $T,)+) {
            type Item = $Item;

            #[inline]
            fn get(&self) -> &$Item {
                &*self.$idx
            }

            #[inline]
            fn get_mut(&mut self) -> &mut $Item {
                &mut *self.$idx
            }
        }
    };
    (@arity $tys:tt $($idx:tt => $Item:ident),+) => {
        $( impl_get!(@one $tys $idx => $Item); )+
    };
    ($( ( $($T:ident),+ ) { $($idx:tt => $Item:ident),+ } )+) => {
        $( impl_get!(@arity [$($T),+] $($idx => $Item),+); )+
    };
}

impl_get! {
    (T0) { 0 => T0 }
    (T0, T1) { 0 => T0, 1 => T1 }
    (T0, T1, T2) { 0 => T0, 1 => T1, 2 => T2 }
    (T0, T1, T2, T3) { 0 => T0, 1 => T1, 2 => T2, 3 => T3 }
    (T0, T1, T2, T3, T4) { 0 => T0, 1 => T1, 2 => T2, 3 => T3, 4 => T4 }
    (T0, T1, T2, T3, T4, T5) { 0 => T0, 1 => T1, 2 => T2, 3 => T3, 4 => T4, 5 => T5 }
    (T0, T1, T2, T3, T4, T5, T6) { 0 => T0, 1 => T1, 2 => T2, 3 => T3, 4 => T4, 5 => T5, 6 => T6 }
    (T0, T1, T2, T3, T4, T5, T6, T7) { 0 => T0, 1 => T1, 2 => T2, 3 => T3, 4 => T4, 5 => T5, 6 => T6, 7 => T7 }
    (T0, T1, T2, T3, T4, T5, T6, T7, T8) { 0 => T0, 1 => T1, 2 => T2, 3 => T3, 4 => T4, 5 => T5, 6 => T6, 7 => T7, 8 => T8 }
    (T0, T1, T2, T3, T4, T5, T6, T7, T8, T9) { 0 => T0, 1 => T1, 2 => T2, 3 => T3, 4 => T4, 5 => T5, 6 => T6, 7 => T7, 8 => T8, 9 => T9 }
}
