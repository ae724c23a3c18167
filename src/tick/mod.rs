pub mod arena_loop;
