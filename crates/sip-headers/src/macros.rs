/// Implements [`Header`](crate::types::headers::Header) and
/// [`TypedHeaderTrait`](crate::types::headers::TypedHeaderTrait) for a
/// concrete header type.
///
/// The type must be `Clone + PartialEq + Display` and provide an inherent
/// `is_valid(&self) -> bool`.
macro_rules! impl_header {
    ($ty:ty, $name:expr) => {
        impl $crate::types::headers::Header for $ty {
            fn name(&self) -> $crate::types::headers::HeaderName {
                $name
            }

            fn validate(&self) -> bool {
                self.is_valid()
            }

            fn equal(&self, other: &dyn $crate::types::headers::Header) -> bool {
                $crate::types::headers::downcast_eq(self, other)
            }

            fn clone_header(&self) -> Box<dyn $crate::types::headers::Header> {
                Box::new(self.clone())
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }

        impl $crate::types::headers::TypedHeaderTrait for $ty {
            fn header_name() -> $crate::types::headers::HeaderName {
                $name
            }
        }
    };
}

/// Derefs a single-field header newtype to its payload.
macro_rules! newtype_deref {
    ($ty:ty => $target:ty) => {
        impl std::ops::Deref for $ty {
            type Target = $target;

            fn deref(&self) -> &$target {
                &self.0
            }
        }

        impl std::ops::DerefMut for $ty {
            fn deref_mut(&mut self) -> &mut $target {
                &mut self.0
            }
        }
    };
}
