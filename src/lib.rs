//! An in-process module dependency loader.
//!
//! Modules are named units that declare the modules they depend on and a factory
//! computing their value. `module_loader` accumulates registrations into a batch,
//! orders the batch so that every module starts after its dependencies, runs each
//! factory exactly once and explains why any module could not start.
//!
//! # Core Concepts
//!
//! - [`ModuleRegistry`]: Owns module declarations, the values they produced and the set of
//! 	failed modules. Created and owned by the host; there is no global instance.
//!
//! - [`ModuleDescriptor`]: A module's name, dependency names and factory, plus the
//! 	optional `lazy` and `ignore_missing_dependencies` flags.
//!
//! - [`Lookup`]: Read access to already started modules, handed to every factory.
//!
//! - **Batch**: Every registration since the last [`ModuleRegistry::run`]. Nothing runs
//! 	at registration time; the host decides when to flush.
//!
//! - **Entry module**: An optional module designated with [`ModuleRegistry::with_entry`]
//! 	whose dependency closure is ordered ahead of the rest of its batch.
//!
//! # Example
//!
//! ```
//! use module_loader::ModuleRegistry ;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = ModuleRegistry::<i64>::new().with_entry( "main" );
//!
//! // Register in any order; dependencies may be declared before they exist.
//! registry.register( "main", [ "config", "db" ], | lookup | {
//! 	Ok( lookup.require( "config" )? + lookup.require( "db" )? )
//! });
//! registry.register( "db", [ "config" ], | lookup | Ok( lookup.require( "config" )? * 10 ));
//! registry.register( "config", [] as [&str; 0], | _ | Ok( 4 ));
//!
//! // Listeners see every module as soon as it starts.
//! registry.subscribe(| event | println!( "started {}", event.name ));
//!
//! let started = registry.run().map_err(| err | err.to_string() )?;
//! assert_eq!( started, [ "config", "db", "main" ]);
//! assert_eq!( registry.lookup( "main" ), Some( &44 ));
//! # Ok(())
//! # }
//! ```
//!
//! # Diagnostics
//!
//! Modules whose dependencies never start stay pending. [`ModuleRegistry::find_errors`]
//! reports failed factories, the first dependency cycle, missing dependencies and the
//! modules left unresolved because of them.
//!
//! ```
//! use module_loader::ModuleRegistry ;
//!
//! let mut registry = ModuleRegistry::<()>::new();
//! registry.register( "a", [ "b" ], | _ | Ok(()));
//! registry.register( "b", [ "a" ], | _ | Ok(()));
//! registry.register( "c", [ "z" ], | _ | Ok(()));
//! registry.run().unwrap();
//!
//! let errors = registry.find_errors();
//! assert_eq!( errors.cycle_names(), Some( vec![ "a", "b", "a" ]));
//! assert_eq!( errors.missing, [ "z" ]);
//! assert_eq!( errors.unresolved, [ "a", "b", "c" ]);
//! assert!( registry.check_errors().is_err() );
//! ```
//!
//! # Threads
//!
//! [`ModuleRegistry`] is a plain single-owner value. Hosts sharing one registry between
//! threads wrap it in a [`SharedRegistry`], which serialises registration and runs
//! behind a single mutex.

mod descriptor ;
mod diagnostics ;
mod loading ;
mod lookup ;
mod registry ;
mod shared ;

/// Default factory error type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[doc( no_inline )]
pub use nonempty_collections::NEVec ;

pub use descriptor::{ ModuleDescriptor, Factory };
pub use diagnostics::ModuleErrors ;
pub use loading::LoadError ;
pub use lookup::{ Lookup, LookupError };
pub use registry::{ ModuleRegistry, ModuleStarted };
pub use shared::SharedRegistry ;
