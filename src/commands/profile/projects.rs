pub const PROJECTS_TEXT: &str = concat!(
    "\nPROJECTS [LUAU]:\n\n",
    "- <a href=\"https://youtu.be/bD-lJHxu2uI\" target=\"_blank\">Match: ELO-based matchmaking system (open-sourced)</a>\n\n",
    "- <a href=\"https://youtu.be/fpKKOii6BRQ\" target=\"_blank\">NetworkService: Networking module with throttling & compression</a>\n\n",
    "- <a href=\"https://youtu.be/fvTjM8hxfj4\" target=\"_blank\">MNIST: Neural network for handwritten digits</a>\n\n",
    "- <a href=\"https://youtu.be/-LTlYfjOhj0\" target=\"_blank\">LuaBuffer: Low-level compression module using bitwise operators</a>\n\n",
    "- <a href=\"https://youtu.be/bNjPcCc6EzQ\" target=\"_blank\">GuildService: Guild/Clan creation system with Bit-Buffers</a>\n\n",
    "- <a href=\"https://youtu.be/8ygDUydN2uo\" target=\"_blank\">Custom Movement Engine: Simulates gravity, acceleration, and surfing</a>\n\n",
    "\nPROJECTS [PROGRAMMING]:\n\n",
    "- <a href=\"https://youtu.be/DtTOlYAf0Yg\" target=\"_blank\">DSA Minesweeper: C-based Minesweeper using matrices</a>\n\n",
    "- <a href=\"https://youtu.be/Q5R49h9ZKE8\" target=\"_blank\">AI Movement Model: Uses a DNN and Supervised Learning to mimic real human movement</a>\n\n",
    "- <a href=\"https://youtu.be/5C3OeCoaIQU\" target=\"_blank\">Neuron (Deep Learning Framework): Fast and Lightweight framework used for training Deep Neural Networks made in C++</a>\n\n",
    "- <a href=\"https://youtu.be/946x71SoFnQ\" target=\"_blank\">AI Transformer Architecture: Full Transformer in Python with NumPy</a>\n\n",
);

crate::canned_command!(
    ProjectsCommand,
    "projects",
    "List of major projects",
    PROJECTS_TEXT
);
