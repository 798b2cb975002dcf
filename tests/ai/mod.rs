mod minimax;
