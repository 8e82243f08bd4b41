use indexmap::IndexMap ;
use thiserror::Error ;



/// Error returned by [`Lookup::require`] when the requested module has not started.
///
/// Converts into [`BoxError`]( crate::BoxError ) so factories can use `?` on it.
#[derive( Debug, Clone, PartialEq, Eq, Error )]
pub enum LookupError {
	/// The module is unknown, lazy and never pulled in, or not yet started.
	#[error( "Module '{0}' has not been started" )] NotStarted( String ),
}

/// Read access to the values of modules that have already started.
///
/// Handed to each factory. Since modules start in dependency order, every declared
/// dependency of the running module is visible here.
pub struct Lookup<'a, V> {
	values: &'a IndexMap<String, V>,
}

impl<'a, V> Lookup<'a, V> {

	pub(crate) fn new( values: &'a IndexMap<String, V> ) -> Self { Self { values }}

	/// Returns the value of a started module.
	#[inline] pub fn get( &self, name: &str ) -> Option<&'a V> { self.values.get( name ) }

	/// Like [`get`]( Self::get ), but fails with [`LookupError::NotStarted`].
	pub fn require( &self, name: &str ) -> Result<&'a V, LookupError> {
		self.values.get( name ).ok_or_else(|| LookupError::NotStarted( name.to_string() ))
	}

	#[inline] pub fn contains( &self, name: &str ) -> bool { self.values.contains_key( name ) }

}

impl<V> Clone for Lookup<'_, V> {
	fn clone( &self ) -> Self { *self }
}

impl<V> Copy for Lookup<'_, V> {}

impl<V> std::fmt::Debug for Lookup<'_, V> {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "Lookup" )
			.field( "started", &self.values.keys().collect::<Vec<_>>() )
			.finish()
	}
}
