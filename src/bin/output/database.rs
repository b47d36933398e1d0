use sqlite::{Connection, State, Statement};
use std::mem;
use std::path::Path;

use output::Output;
use {Event, Result};

pub struct Database {
    #[allow(dead_code)]
    connection: Connection,
    statement: Statement<'static>,
}

impl Database {
    pub fn new<T: AsRef<Path>>(path: T) -> Result<Database> {
        use sql::prelude::*;

        let connection = ok!(Connection::open(path));

        ok!(connection.execute({
            ok!(create_table("plan").if_not_exists().columns(&[
                "time".integer().not_null(),
                "model".string().not_null(),
                "content".string().not_null(),
            ]).compile())
        }));

        ok!(connection.execute(ok!(delete_from("plan").compile())));

        let statement = {
            let statement = ok!(connection.prepare({
                ok!(insert_into("plan").columns(&["time", "model", "content"]).compile())
            }));
            unsafe { mem::transmute(statement) }
        };

        Ok(Database { connection: connection, statement: statement })
    }
}

impl Output for Database {
    fn next(&mut self, event: &Event) -> Result<()> {
        let statement = &mut self.statement;
        ok!(statement.reset());
        ok!(statement.bind(1, event.time as i64));
        ok!(statement.bind(2, &*event.request.model));
        ok!(statement.bind(3, event.request.content()));
        if State::Done != ok!(statement.next()) {
            raise!("failed to write into the database");
        }
        Ok(())
    }
}
