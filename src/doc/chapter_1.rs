/*!
# Statements
*/

#[path = "statements/endloop.rs"]
#[allow(non_snake_case)]
pub mod ENDLOOP;

#[path = "statements/key.rs"]
#[allow(non_snake_case)]
pub mod KEY;

#[path = "statements/keydown.rs"]
#[allow(non_snake_case)]
pub mod KEYDOWN;

#[path = "statements/keypress.rs"]
#[allow(non_snake_case)]
pub mod KEYPRESS;

#[path = "statements/loop.rs"]
#[allow(non_snake_case)]
pub mod LOOP;

#[path = "statements/pause.rs"]
#[allow(non_snake_case)]
pub mod PAUSE;
