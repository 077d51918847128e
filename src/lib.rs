//! # Linear Collections
//!
//! Ordered in-memory containers sharing one uniform list contract over three
//! backing representations, plus FIFO and LIFO adapters and a cursor that can
//! mutate a list mid-traversal.
//!
//! This crate provides `ArrayList`, `SinglyLinkedList` and
//! `DoublyLinkedList`, all implementing the same [`List`] operations with
//! identical signatures and error semantics and differing only in
//! complexity, together with `BoundedQueue`, the auto-growing `Queue` and
//! `Stack`.
//!
//! ## Key Features
//!
//! * **One contract, three backings:** pick a representation for its
//!   complexity profile, not its API. Code written against [`List`] runs on
//!   any of the three.
//! * **Structural mutation mid-traversal:** every list hands out a
//!   [`Cursor`] whose `insert`/`remove`/`set` keep the container and the
//!   cursor consistent; the doubly-linked cursor splices in O(1).
//! * **Errors, not panics:** misuse (bad index, empty container, stale
//!   cursor, full bounded queue) surfaces as an [`Error`] or
//!   [`CapacityError`] value; nothing is logged or swallowed internally.
//! * **Single-threaded by contract:** no locking, no suspension points; a
//!   cursor's exclusive borrow makes aliasing misuse a compile error.
//!
//! ## Complexity at a glance
//!
//! | Operation | `ArrayList` | `SinglyLinkedList` | `DoublyLinkedList` |
//! |---|---|---|---|
//! | `get` / `set` | O(1) | O(n) | O(n), nearer end |
//! | `insert` / `remove` at index | O(n) | O(n) | O(n), ends O(1) |
//! | front insert/remove | O(n) | O(1) | O(1) |
//! | back insert/remove | O(1) amortized | O(n) | O(1) |
//! | cursor `insert` / `remove` | O(n) | O(n) | O(1) |
//!
//! ## Examples
//!
//! ### Lists
//!
//! ```rust
//! use linear_collections::{ArrayList, List};
//!
//! let mut list = ArrayList::new();
//! list.insert("a", 0).unwrap();
//! list.insert("c", 1).unwrap();
//! list.insert("b", 1).unwrap();
//!
//! assert_eq!(list.get(1), Ok(&"b"));
//! assert_eq!(list.remove(2), Ok("c"));
//! assert_eq!(list.len(), 2);
//! ```
//!
//! ### Cursors
//!
//! ```rust
//! use linear_collections::{Cursor, DoublyLinkedList};
//!
//! let mut list: DoublyLinkedList<i32> = (1..=3).collect();
//! let mut cursor = list.cursor();
//!
//! assert_eq!(cursor.next(), Ok(&1));
//! cursor.remove().unwrap();        // drop the 1
//! assert_eq!(cursor.next(), Ok(&2));
//! cursor.insert(9).unwrap();       // lands between 2 and 3
//! drop(cursor);
//!
//! let collected: Vec<i32> = list.iter().copied().collect();
//! assert_eq!(collected, [2, 9, 3]);
//! ```
//!
//! ### Queues and stacks
//!
//! ```rust
//! use linear_collections::{Queue, Stack};
//!
//! let mut queue = Queue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//! assert_eq!(queue.dequeue(), Ok(1));
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.pop(), Ok(2));
//! ```

// --- Module Declarations ---

pub mod array_list;
pub mod bounded_queue;
pub mod doubly_linked;
pub mod error;
pub mod list;
pub mod queue;
pub mod singly_linked;
pub mod stack;

// --- Re-exports ---

pub use array_list::ArrayList;
pub use bounded_queue::BoundedQueue;
pub use doubly_linked::{DoublyCursor, DoublyLinkedList};
pub use error::{CapacityError, Error};
pub use list::{Cursor, IndexCursor, List};
pub use queue::Queue;
pub use singly_linked::SinglyLinkedList;
pub use stack::Stack;
