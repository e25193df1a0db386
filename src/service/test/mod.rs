mod command_registry;
