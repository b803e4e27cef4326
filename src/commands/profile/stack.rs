pub const STACK_TEXT: &str = concat!(
    "\nSTACK:\n\n",
    "- <a href='https://www.lua.org/' target='_blank'><b>Lua</b></a>\n\n",
    "- <a href='https://www.luau.org/' target='_blank'><b>Luau</b></a>\n\n",
    "- <a href='https://developer.mozilla.org/en-US/docs/Web/HTML' target='_blank'><b>HTML</b></a>\n\n",
    "- <a href='https://developer.mozilla.org/en-US/docs/Web/CSS' target='_blank'><b>CSS</b></a>\n\n",
    "- <a href='https://developer.mozilla.org/en-US/docs/Web/JavaScript' target='_blank'><b>JavaScript</b></a>\n\n",
    "- <a href='https://www.typescriptlang.org/' target='_blank'><b>TypeScript</b></a>\n\n",
    "- <a href='https://www.python.org/' target='_blank'><b>Python</b></a>\n\n",
    "- <a href='https://en.wikipedia.org/wiki/C_(programming_language)' target='_blank'><b>C</b></a>\n\n",
    "- <a href='https://en.wikipedia.org/wiki/C%2B%2B' target='_blank'><b>C++</b></a>\n\n",
);

crate::canned_command!(StackCommand, "stack", "View my tech stack", STACK_TEXT);
