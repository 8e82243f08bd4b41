//! Thread-safe handle over a [`ModuleRegistry`].
//!
//! A single mutex guards the registry, so registration and batch runs never interleave
//! and at most one batch is in flight. Factories run while the lock is held and must
//! not call back into the same handle.

use std::fmt::{ Debug, Display };
use std::sync::Arc ;
use parking_lot::Mutex ;

use crate::BoxError ;
use crate::descriptor::ModuleDescriptor ;
use crate::diagnostics::ModuleErrors ;
use crate::loading::LoadError ;
use crate::lookup::Lookup ;
use crate::registry::{ ModuleRegistry, ModuleStarted };



/// Cloneable, thread-safe handle to a shared [`ModuleRegistry`].
///
/// Cloning the handle creates another reference to the same registry.
///
/// ```
/// use std::thread ;
/// use module_loader::SharedRegistry ;
///
/// let registry = SharedRegistry::<String>::default();
///
/// let handles = ( 0..4 ).map(| index | {
/// 	let registry = registry.clone();
/// 	thread::spawn( move || registry.register( format!( "m{index}" ), [] as [&str; 0], move | _ | Ok( index.to_string() )))
/// }).collect::<Vec<_>>();
/// handles.into_iter().for_each(| handle | assert!( handle.join().unwrap() ));
///
/// assert_eq!( registry.run().unwrap().len(), 4 );
/// assert_eq!( registry.lookup_cloned( "m2" ), Some( "2".to_string() ));
/// ```
pub struct SharedRegistry<V, E = BoxError> {
	inner: Arc<Mutex<ModuleRegistry<V, E>>>,
}

impl<V, E> Clone for SharedRegistry<V, E> {
	fn clone( &self ) -> Self { Self { inner: Arc::clone( &self.inner )}}
}

impl<V, E> Default for SharedRegistry<V, E> {
	fn default() -> Self { Self::new( ModuleRegistry::default() )}
}

impl<V, E> From<ModuleRegistry<V, E>> for SharedRegistry<V, E> {
	fn from( registry: ModuleRegistry<V, E> ) -> Self { Self::new( registry )}
}

impl<V, E> SharedRegistry<V, E> {

	pub fn new( registry: ModuleRegistry<V, E> ) -> Self {
		Self { inner: Arc::new( Mutex::new( registry ))}
	}

	/// See [`ModuleRegistry::register`].
	pub fn register<F>(
		&self,
		name: impl Into<String>,
		dependencies: impl IntoIterator<Item = impl Into<String>>,
		factory: F,
	) -> bool
	where
		F: FnOnce( &Lookup<'_, V> ) -> Result<V, E> + Send + 'static,
	{
		self.inner.lock().register( name, dependencies, factory )
	}

	/// See [`ModuleRegistry::define`].
	pub fn define( &self, descriptor: ModuleDescriptor<V, E> ) -> bool {
		self.inner.lock().define( descriptor )
	}

	/// Runs `f` on the value of a started module while holding the lock.
	pub fn with_lookup<R>( &self, name: &str, f: impl FnOnce( &V ) -> R ) -> Option<R> {
		self.inner.lock().lookup( name ).map( f )
	}

	pub fn lookup_cloned( &self, name: &str ) -> Option<V>
	where
		V: Clone,
	{
		self.with_lookup( name, V::clone )
	}

	/// See [`ModuleRegistry::subscribe`].
	pub fn subscribe( &self, listener: impl FnMut( &ModuleStarted<'_, V> ) + Send + 'static ) {
		self.inner.lock().subscribe( listener );
	}

	/// See [`ModuleRegistry::find_errors`].
	pub fn find_errors( &self ) -> ModuleErrors { self.inner.lock().find_errors() }

	/// See [`ModuleRegistry::reset`].
	pub fn reset( &self ) { self.inner.lock().reset() }

}

impl<V, E: Debug + Display> SharedRegistry<V, E> {

	/// Runs the current batch with the lock held for the whole pass.
	///
	/// # Errors
	/// See [`ModuleRegistry::run`].
	pub fn run( &self ) -> Result<Vec<String>, LoadError<E>> { self.inner.lock().run() }

	/// # Errors
	/// See [`ModuleRegistry::start`].
	pub fn start( &self, name: &str ) -> Result<Vec<String>, LoadError<E>> { self.inner.lock().start( name ) }

	/// # Errors
	/// See [`ModuleRegistry::check_errors`].
	pub fn check_errors( &self ) -> Result<(), LoadError<E>> { self.inner.lock().check_errors() }

}

impl<V, E> Debug for SharedRegistry<V, E> {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		match self.inner.try_lock() {
			Some( registry ) => f.debug_tuple( "SharedRegistry" ).field( &*registry ).finish(),
			None => f.debug_tuple( "SharedRegistry" ).field( &"<locked>" ).finish(),
		}
	}
}
