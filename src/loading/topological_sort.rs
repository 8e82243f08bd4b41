use std::collections::HashSet ;

use crate::registry::ModuleRegistry ;



/// Depth-first post-order over the pending modules.
///
/// Roots are visited in registration order with the entry module, if pending, moved to
/// the front. Each module's dependencies are visited in declaration order before the
/// module itself is appended. Dependencies that are unregistered, already started or
/// failed are not visited; lazy ones are.
pub(super) fn topological_order<V, E>( registry: &ModuleRegistry<V, E> ) -> Vec<String> {

	let mut visited = HashSet::with_capacity( registry.pending.len() );
	let mut order = Vec::with_capacity( registry.pending.len() );

	roots( registry ).for_each(| root | visit( registry, root, &mut visited, &mut order ));

	order

}

/// Pending modules in registration order, entry module first.
pub(crate) fn roots<'a, V, E>( registry: &'a ModuleRegistry<V, E> ) -> impl Iterator<Item = &'a str> {

	let entry = registry.entry.as_deref()
		.filter(| entry | registry.pending.contains( *entry ));

	entry.into_iter().chain(
		registry.pending.iter()
			.map( String::as_str )
			.filter( move | name | Some( *name ) != entry )
	)

}

fn visit<'a, V, E>(
	registry: &'a ModuleRegistry<V, E>,
	name: &'a str,
	visited: &mut HashSet<&'a str>,
	order: &mut Vec<String>,
) {

	if !visited.insert( name ) { return }

	if let Some( descriptor ) = registry.descriptors.get( name ) {
		descriptor.dependencies().iter()
			.map( String::as_str )
			.filter(| dependency | registry.descriptors.contains_key( *dependency ))
			.filter(| dependency | !registry.values.contains_key( *dependency ))
			.filter(| dependency | !registry.failed.contains( *dependency ))
			.for_each(| dependency | visit( registry, dependency, visited, order ));
	}

	order.push( name.to_string() );

}
